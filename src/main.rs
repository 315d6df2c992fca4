use std::io::{self, BufRead, Write};

use frontend::lexer::{lexer::Lexer, tokens::TokenKind};

const PROMPT: &str = ">> ";

/// Interactive token printer: reads a line, lexes it, prints every token on
/// its own line, then prompts again.
fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", PROMPT);
    stdout.flush().unwrap();

    for line in stdin.lock().lines() {
        let line = line.unwrap();

        if !line.trim().is_empty() {
            let mut lexer = Lexer::new(line);

            loop {
                let token = lexer.next_token();
                if token.kind == TokenKind::EOF {
                    break;
                }

                println!("{}", token);
            }
        }

        print!("{}", PROMPT);
        stdout.flush().unwrap();
    }
}
