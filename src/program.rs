//! Run-length tokenizer for Brainfuck source.
//!
//! Runs of `>`, `<`, `+` and `-` collapse into a single counted token.
//! Every other Brainfuck instruction is its own token. Characters outside
//! `><+-.,[]` are comments: they are skipped and they end the current run.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Right(usize),
    Left(usize),
    Increment(usize),
    Decrement(usize),
    Output,
    Input,
    LoopStart,
    LoopEnd,
}

impl Token {
    /// The source character this token was built from.
    pub fn op(&self) -> char {
        match self {
            Token::Right(_) => '>',
            Token::Left(_) => '<',
            Token::Increment(_) => '+',
            Token::Decrement(_) => '-',
            Token::Output => '.',
            Token::Input => ',',
            Token::LoopStart => '[',
            Token::LoopEnd => ']',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Right(n) | Token::Left(n) | Token::Increment(n) | Token::Decrement(n) => {
                write!(f, "{}x{n}", self.op())
            }
            _ => write!(f, "{}", self.op()),
        }
    }
}

/// A token plus the character index where it starts in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub token: Token,
    pub position: usize,
}

#[derive(Debug, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

/// A run of a repeatable instruction that has not been emitted yet.
struct Run {
    op: char,
    count: usize,
    position: usize,
}

impl Run {
    fn into_instruction(self) -> Instruction {
        let token = match self.op {
            '>' => Token::Right(self.count),
            '<' => Token::Left(self.count),
            '+' => Token::Increment(self.count),
            _ => Token::Decrement(self.count),
        };
        Instruction { token, position: self.position }
    }
}

fn is_repeatable(c: char) -> bool {
    matches!(c, '>' | '<' | '+' | '-')
}

fn single_token(c: char) -> Option<Token> {
    match c {
        '.' => Some(Token::Output),
        ',' => Some(Token::Input),
        '[' => Some(Token::LoopStart),
        ']' => Some(Token::LoopEnd),
        _ => None,
    }
}

impl Program {
    pub fn parse(code: &str) -> Self {
        let mut instructions = Vec::new();
        let mut run: Option<Run> = None;

        for (position, current) in code.chars().enumerate() {
            if let Some(active) = run.as_mut() {
                if active.op == current {
                    active.count += 1;
                    continue;
                }
            }

            if let Some(finished) = run.take() {
                instructions.push(finished.into_instruction());
            }

            if is_repeatable(current) {
                run = Some(Run { op: current, count: 1, position });
            } else if let Some(token) = single_token(current) {
                instructions.push(Instruction { token, position });
            }
        }

        if let Some(finished) = run {
            instructions.push(finished.into_instruction());
        }

        Program { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.instructions.iter().map(|i| i.token)
    }
}

impl From<&str> for Program {
    fn from(value: &str) -> Self {
        Program::parse(value)
    }
}
