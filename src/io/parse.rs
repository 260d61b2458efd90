use std::fmt;
use std::str::FromStr;

pub(crate) struct InputError {
    line: usize,
    reason: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Insert { name: String, priority: i64 },
    Update { name: String, priority: i64 },
    Pop,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["insert", name, priority] => Ok(Self::Insert {
                name: name.to_string(),
                priority: integer(priority)?,
            }),
            ["update", name, priority] => Ok(Self::Update {
                name: name.to_string(),
                priority: integer(priority)?,
            }),
            ["pop"] => Ok(Self::Pop),
            [command, ..] => Err(format!("{}: not a valid command", command)),
            [] => Err("empty command".to_string()),
        }
    }
}

fn integer(word: &str) -> Result<i64, String> {
    word.parse()
        .map_err(|_| format!("{}: not a valid integer", word))
}

fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

pub(crate) fn text(bytes: &[u8]) -> Result<&str, String> {
    std::str::from_utf8(bytes)
        .map_err(|err| format!("input is not valid UTF-8: {}", err))
}

pub(crate) fn numbers(text: &str) -> Result<Vec<i64>, InputError> {
    let mut numbers = vec![];
    for (line, content) in numbered_lines(text) {
        for word in content.split_whitespace() {
            let number = integer(word)
                .map_err(|reason| InputError { line, reason })?;
            numbers.push(number);
        }
    }
    Ok(numbers)
}

pub(crate) fn script(text: &str) -> Result<Vec<Step>, InputError> {
    numbered_lines(text)
        .map(|(line, content)| {
            content.parse().map_err(|reason| InputError { line, reason })
        })
        .collect()
}
