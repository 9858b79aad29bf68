/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScrollDown(usize),
    ScrollUp(usize),
    Toggle(String),
    Generate,
    Copy,
    Dismiss,
    LoadMore,
    Help,
    Quit,
}

pub const HELP: &str = "\
j [n] / k [n]   scroll down / up
t <id>          check or uncheck a webhook
g               generate a handler for the checked webhooks
c               copy the generated handler
x               close the generated handler
r               load the next page now
h               this help
q               quit";

pub fn parse(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    let arg = parts.next();

    let command = match head {
        "j" | "down" => Command::ScrollDown(parse_count(arg)?),
        "k" | "up" => Command::ScrollUp(parse_count(arg)?),
        "t" | "toggle" => match arg {
            Some(id) => Command::Toggle(id.to_string()),
            None => return Err("toggle needs a webhook id".to_string()),
        },
        "g" | "generate" => Command::Generate,
        "c" | "copy" => Command::Copy,
        "x" | "close" => Command::Dismiss,
        "r" | "more" => Command::LoadMore,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}")),
    };
    Ok(command)
}

fn parse_count(arg: Option<&str>) -> Result<usize, String> {
    match arg {
        None => Ok(1),
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("{raw:?} is not a line count")),
    }
}
