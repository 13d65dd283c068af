use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
    sync::{Arc, Mutex},
};

/// Output shared between the controller and background notification tasks.
pub type SharedWriter<W> = Arc<Mutex<W>>;

/// Reads whitespace separated tokens, crossing line boundaries as needed.
pub struct InputReader<R> {
    reader: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: VecDeque::new(),
        }
    }

    /// Returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }

    /// Missing input reads as an empty string.
    pub fn read_text(&mut self) -> io::Result<String> {
        Ok(self.next_token()?.unwrap_or_default())
    }

    /// Missing or unparsable input reads as zero.
    pub fn read_count(&mut self) -> io::Result<u32> {
        let Some(token) = self.next_token()? else {
            return Ok(0);
        };
        Ok(token.parse().unwrap_or_else(|e| {
            log::warn!("ticket count {token:?} is not a number: {e}");
            0
        }))
    }
}

pub fn prompt<W: Write>(out: &SharedWriter<W>, label: &str) -> io::Result<()> {
    let mut out = out.lock().expect("output lock");
    write!(out, "{label} : ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_tokens_span_lines() {
        let mut input = InputReader::new(Cursor::new("Al Li\n\n  al@x.com\n3\n"));
        assert_eq!("Al", input.read_text().unwrap());
        assert_eq!("Li", input.read_text().unwrap());
        assert_eq!("al@x.com", input.read_text().unwrap());
        assert_eq!(3, input.read_count().unwrap());
        assert_eq!(None, input.next_token().unwrap());
    }

    #[test]
    fn test_exhausted_input_reads_as_empty() {
        let mut input = InputReader::new(Cursor::new("Al\n"));
        assert_eq!("Al", input.read_text().unwrap());
        assert_eq!("", input.read_text().unwrap());
        assert_eq!(0, input.read_count().unwrap());
    }

    #[test]
    fn test_bad_count_reads_as_zero() {
        let mut input = InputReader::new(Cursor::new("three -1 7"));
        assert_eq!(0, input.read_count().unwrap());
        assert_eq!(0, input.read_count().unwrap());
        assert_eq!(7, input.read_count().unwrap());
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let out = Arc::new(Mutex::new(Vec::new()));
        prompt(&out, "Enter your first name").unwrap();
        assert_eq!(b"Enter your first name : ".to_vec(), *out.lock().unwrap());
    }
}
