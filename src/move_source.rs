//! Finds where a function is declared in Move source, so the code viewer can scroll to it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Punct(char),
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits source into words and punctuation, dropping whitespace, comments and string literals.
/// Returns the tokens alongside the 0-based line each one starts on.
fn tokenize(source: &str) -> (Vec<Token<'_>>, Vec<usize>) {
    let mut tokens = Vec::new();
    let mut lines = Vec::new();
    let mut line = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                while chars.next_if(|&(_, c)| c != '\n').is_some() {}
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let mut previous = ' ';
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                    }
                    if previous == '*' && c == '/' {
                        break;
                    }
                    previous = c;
                }
            }
            '"' => {
                let mut escaped = false;
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                    }
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
            }
            c if is_word_char(c) => {
                let mut end = start + c.len_utf8();
                while let Some((i, c)) = chars.next_if(|&(_, c)| is_word_char(c)) {
                    end = i + c.len_utf8();
                }
                tokens.push(Token::Word(&source[start..end]));
                lines.push(line);
            }
            c => {
                tokens.push(Token::Punct(c));
                lines.push(line);
            }
        }
    }

    (tokens, lines)
}

/// Walks back over the modifiers in front of `fun`. Only `public`, `public(friend)`,
/// `public(package)`, their Move 2 shorthands `friend` and `package`, and `entry` make a
/// function callable from outside its module.
fn is_callable_from_outside(preceding: &[Token<'_>]) -> bool {
    use Token::*;

    let mut rest = preceding;
    let mut callable = false;

    loop {
        match rest {
            [before @ .., Word("public"), Punct('('), Word("friend" | "package"), Punct(')')] => {
                callable = true;
                rest = before;
            }
            [before @ .., Word("public" | "friend" | "package" | "entry")] => {
                callable = true;
                rest = before;
            }
            [before @ .., Word("native" | "inline")] => {
                rest = before;
            }
            _ => return callable,
        }
    }
}

/// Returns the 0-based line of the `fun` keyword declaring `function_name`, when that function is
/// public or entry. Returns 0 when there is no such declaration, the first line of a module is
/// its `module` header so it never holds a function.
pub fn locate_function_line(source: &str, function_name: &str) -> usize {
    let (tokens, lines) = tokenize(source);

    tokens
        .windows(3)
        .enumerate()
        .find_map(|(i, window)| match window {
            [Token::Word("fun"), Token::Word(name), Token::Punct('(' | '<')]
                if *name == function_name && is_callable_from_outside(&tokens[..i]) =>
            {
                Some(lines[i])
            }
            _ => None,
        })
        .unwrap_or(0)
}
