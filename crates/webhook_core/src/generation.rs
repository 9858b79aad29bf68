use crate::WebhookId;

pub type RequestId = u64;

/// Lifecycle of the generated handler. Exactly one of these holds, so the
/// result view is open iff the state is not `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating { request_id: RequestId },
    Ready { request_id: RequestId, code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub request_id: RequestId,
    pub webhook_ids: Vec<WebhookId>,
}

/// Single-flight generation state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationWorkflow {
    state: GenerationState,
    next_request_id: RequestId,
}

impl GenerationWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.state, GenerationState::Generating { .. })
    }

    pub fn code(&self) -> Option<&str> {
        match &self.state {
            GenerationState::Ready { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// The request that produced the artifact currently shown, if any.
    pub fn ready_request(&self) -> Option<RequestId> {
        match self.state {
            GenerationState::Ready { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    /// Moves to `Generating` for the given selection snapshot. Rejected when
    /// the snapshot is empty or a request is already outstanding. Starting
    /// from `Ready` drops the previous artifact.
    pub fn start(&mut self, webhook_ids: Vec<WebhookId>) -> Option<GenerationRequest> {
        if webhook_ids.is_empty() || self.is_generating() {
            return None;
        }
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.state = GenerationState::Generating { request_id };
        Some(GenerationRequest {
            request_id,
            webhook_ids,
        })
    }

    /// Stores the artifact if `request_id` is the outstanding request.
    pub fn succeed(&mut self, request_id: RequestId, code: String) -> bool {
        if !self.is_outstanding(request_id) {
            return false;
        }
        self.state = GenerationState::Ready { request_id, code };
        true
    }

    /// Returns to `Idle` if `request_id` is the outstanding request. No error
    /// is retained.
    pub fn fail(&mut self, request_id: RequestId) -> bool {
        if !self.is_outstanding(request_id) {
            return false;
        }
        self.state = GenerationState::Idle;
        true
    }

    /// Closes the result. Only valid from `Ready`.
    pub fn dismiss(&mut self) -> bool {
        if !matches!(self.state, GenerationState::Ready { .. }) {
            return false;
        }
        self.state = GenerationState::Idle;
        true
    }

    fn is_outstanding(&self, request_id: RequestId) -> bool {
        matches!(self.state, GenerationState::Generating { request_id: current } if current == request_id)
    }
}
