use std::io::{self, BufRead};

/// Read one line the way a text-mode reader does, appending it to `line`
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Whichever terminator is found is
/// appended as a single `\n`; the last line of the input may have none.
/// Returns the number of bytes appended, so `0` means end of input.
///
/// # Errors
///
/// Returns an error if reading fails or the line is not valid UTF-8
pub fn read_text_line<R: BufRead>(reader: &mut R, line: &mut String) -> io::Result<usize> {
    let mut bytes = Vec::new();

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                bytes.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                // \r\n is one terminator, even across a buffer boundary
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                bytes.push(b'\n');
                break;
            }
            None => {
                let len = available.len();
                bytes.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }

    let text = String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    line.push_str(&text);
    Ok(text.len())
}

/// Returns true when `line` is longer than `threshold` characters
///
/// Length is counted in `char`s, including any line terminator still attached
/// to `line`. A line whose byte length is already within the threshold cannot
/// have more characters than that, so the character count is skipped for it.
pub fn exceeds_length(line: &str, threshold: usize) -> bool {
    if line.len() <= threshold {
        return false;
    }
    line.chars().count() > threshold
}
