//! Text to Morse code conversion.

/// One element of a Morse character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorseSymbol {
    /// Short mark (dit).
    Dit,
    /// Long mark (dah), three dits wide.
    Dah,
    /// Silence between marks, or a word space.
    Gap,
}

/// Converts text into Morse characters, each a sequence of symbols.
pub trait MorseEncoder {
    fn encode(&self, text: &str) -> Vec<Vec<MorseSymbol>>;
}

/// International (ITU) Morse code, including the German umlauts.
///
/// Marks inside a character are separated by [`MorseSymbol::Gap`]; a space
/// in the input becomes a character made of a single gap. Characters without
/// a Morse representation are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItuMorse;

impl MorseEncoder for ItuMorse {
    fn encode(&self, text: &str) -> Vec<Vec<MorseSymbol>> {
        let mut out = Vec::new();

        for c in text.chars() {
            if c.is_whitespace() {
                out.push(vec![MorseSymbol::Gap]);
                continue;
            }
            let Some(pattern) = c.to_uppercase().next().and_then(pattern_for) else {
                log::debug!("no Morse code for {c:?}, skipping");
                continue;
            };

            let mut symbols = Vec::with_capacity(pattern.len() * 2);
            for (i, mark) in pattern.bytes().enumerate() {
                if i > 0 {
                    symbols.push(MorseSymbol::Gap);
                }
                symbols.push(if mark == b'.' {
                    MorseSymbol::Dit
                } else {
                    MorseSymbol::Dah
                });
            }
            out.push(symbols);
        }

        out
    }
}

fn pattern_for(c: char) -> Option<&'static str> {
    let pattern = match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        'Ä' => ".-.-",
        'Ö' => "---.",
        'Ü' => "..--",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        '?' => "..--..",
        '/' => "-..-.",
        '=' => "-...-",
        '+' => ".-.-.",
        '-' => "-....-",
        ':' => "---...",
        '@' => ".--.-.",
        _ => return None,
    };
    Some(pattern)
}

#[cfg(test)]
mod tests {
    use super::MorseSymbol::{Dah, Dit, Gap};
    use super::*;

    #[test]
    fn test_letters_with_inner_gaps() {
        assert_eq!(ItuMorse.encode("a"), vec![vec![Dit, Gap, Dah]]);
        assert_eq!(ItuMorse.encode("E"), vec![vec![Dit]]);
    }

    #[test]
    fn test_word_space_and_unknown_characters() {
        let encoded = ItuMorse.encode("e t~");
        assert_eq!(encoded, vec![vec![Dit], vec![Gap], vec![Dah]]);
    }

    #[test]
    fn test_umlaut() {
        assert_eq!(ItuMorse.encode("ü"), vec![vec![Dit, Gap, Dit, Gap, Dah, Gap, Dah]]);
    }
}
