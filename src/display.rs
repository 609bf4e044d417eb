use std::fmt::{Display, Formatter};

/// Formats a slice as `[a, b, c]`.
pub struct DisplaySlice<'a, D: Display> {
    items: &'a [D],
    separator: &'static str,
    brackets: bool,
}
impl<'a, D: Display> DisplaySlice<'a, D> {
    /// Bare comma-separated values, without the enclosing brackets.
    pub fn csv(items: &'a [D]) -> Self {
        DisplaySlice {
            items,
            separator: ",",
            brackets: false,
        }
    }

    /// One value per line.
    pub fn lines(items: &'a [D]) -> Self {
        DisplaySlice {
            items,
            separator: "\n",
            brackets: false,
        }
    }
}

impl<'a, D: Display> Display for DisplaySlice<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.brackets {
            write!(f, "[")?;
        }
        let len = self.items.len();
        for (index, item) in self.items.iter().enumerate() {
            write!(f, "{item}")?;
            if index != len - 1 {
                write!(f, "{}", self.separator)?;
            }
        }
        if self.brackets {
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplaySlice {
            items,
            separator: ", ",
            brackets: true,
        }
    }
}
