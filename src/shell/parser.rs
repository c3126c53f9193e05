// Command enum to represent shell queries
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Docs,
    Caches,
    Bundle,
    Roots,
    Perm(String),
    GenPath { directory: String, extension: String },
    Mkdir(String),
    Unknown(String),
}

// Parse raw command string into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "QUIT" | "Q" => Command::Quit,
        "HELP" => Command::Help,
        "DOCS" => Command::Docs,
        "CACHES" => Command::Caches,
        "BUNDLE" => Command::Bundle,
        "ROOTS" => Command::Roots,
        "PERM" => Command::Perm(arg.to_string()),
        "GENPATH" => {
            let mut args = arg.splitn(2, char::is_whitespace);
            Command::GenPath {
                directory: args.next().unwrap_or("").to_string(),
                extension: args.next().unwrap_or("").trim().to_string(),
            }
        }
        "MKDIR" => Command::Mkdir(arg.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    }
}
