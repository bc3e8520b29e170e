//! `Text`: an immutable string as a sequence of characters.
//!
//! Text equals other text with the same characters and nothing else. An
//! [`Array<char>`](crate::Array) holding the same characters is not equal to
//! the `Text`, in either direction.

use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::{string::String, vec::Vec};

use crate::{Ranged, Sequence, hash::ElementHash, iter::Iter, range::Window};

#[derive(Clone, Default)]
pub struct Text {
    chars: Vec<char>,
}

impl Text {
    pub fn new(s: &str) -> Self {
        Text {
            chars: s.chars().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    fn from_window(&self, window: Option<Window>) -> Self {
        match window {
            Some(window) => window.indexes().map(|i| self.chars[i]).collect(),
            None => Text::default(),
        }
    }
}

impl Sequence for Text {
    type Element = char;
    const IS_TEXT: bool = true;

    fn last_index(&self) -> Option<usize> {
        self.chars.len().checked_sub(1)
    }

    fn get(&self, index: usize) -> Option<char> {
        self.chars.as_slice().get(index).copied()
    }

    fn size(&self) -> usize {
        self.chars.len()
    }
}

impl Ranged for Text {
    type Range = Self;

    fn span(&self, from: isize, to: isize) -> Self {
        self.from_window(Window::span(self.chars.len(), from, to))
    }

    fn span_from(&self, from: isize) -> Self {
        self.from_window(Window::span_from(self.chars.len(), from))
    }

    fn span_to(&self, to: isize) -> Self {
        self.from_window(Window::span_to(self.chars.len(), to))
    }

    fn segment(&self, from: isize, length: isize) -> Self {
        self.from_window(Window::segment(self.chars.len(), from, length))
    }

    fn empty_range(&self) -> Self {
        Text::default()
    }
}

impl<R> PartialEq<R> for Text
where
    R: Sequence,
    char: PartialEq<R::Element>,
{
    fn eq(&self, other: &R) -> bool {
        self.equals(other)
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl ElementHash for Text {
    fn element_hash(&self) -> u64 {
        self.hash_code()
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.chars.as_slice().iter().collect();
        fmt::Debug::fmt(&s, f)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.chars
            .as_slice()
            .iter()
            .try_for_each(|&c| f.write_char(c))
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::new(&s)
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Text {
            chars: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = char;
    type IntoIter = Iter<'a, Text>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;
