use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Accepted ISBN lengths, counted in characters.
pub const ISBN_LENGTH: std::ops::RangeInclusive<usize> = 10..=13;

/// A validated catalog entry.
///
/// Books carry no identifier: two books are the same book when every field
/// matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub isbn: String,
    pub cover_url: String,
}

impl Book {
    /// True when the title or the author contains `query`, ignoring case.
    /// An empty query matches every book.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.author.to_lowercase().contains(&needle)
    }
}

/// Raw entry-form input, not yet validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub isbn: String,
    pub cover_url: String,
}

/// One input of the entry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Title,
    Author,
    Year,
    Genre,
    Isbn,
    CoverUrl,
}

impl BookDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Author => self.author = value,
            DraftField::Year => self.year = value,
            DraftField::Genre => self.genre = value,
            DraftField::Isbn => self.isbn = value,
            DraftField::CoverUrl => self.cover_url = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
            DraftField::Year => &self.year,
            DraftField::Genre => &self.genre,
            DraftField::Isbn => &self.isbn,
            DraftField::CoverUrl => &self.cover_url,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn fields(&self) -> [&str; 6] {
        [
            &self.title,
            &self.author,
            &self.year,
            &self.genre,
            &self.isbn,
            &self.cover_url,
        ]
    }

    /// Run the form rules in order and build a [`Book`] from the first
    /// draft that passes all of them.
    pub fn validate(&self) -> Result<Book, ValidationError> {
        if self.fields().iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::MissingField);
        }

        let year = match self.year.parse::<i32>() {
            Ok(year) if year > 0 => year,
            _ => return Err(ValidationError::InvalidYear),
        };

        if !ISBN_LENGTH.contains(&self.isbn.chars().count()) {
            return Err(ValidationError::InvalidIsbnLength);
        }

        if !has_http_prefix(&self.cover_url) {
            return Err(ValidationError::InvalidCoverUrlScheme);
        }

        Ok(Book {
            title: self.title.clone(),
            author: self.author.clone(),
            year,
            genre: self.genre.clone(),
            isbn: self.isbn.clone(),
            cover_url: self.cover_url.clone(),
        })
    }
}

impl TryFrom<&BookDraft> for Book {
    type Error = ValidationError;

    fn try_from(draft: &BookDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

/// Case-insensitive check for a leading "http".
pub fn has_http_prefix(url: &str) -> bool {
    url.get(..4)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookDraft {
        BookDraft {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: "1965".to_string(),
            genre: "Sci-Fi".to_string(),
            isbn: "9780441013593".to_string(),
            cover_url: "http://x/d.jpg".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_parses_year() {
        let book = valid_draft().validate().unwrap();
        assert_eq!(book.year, 1965);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn test_every_blank_field_is_missing() {
        for field in [
            DraftField::Title,
            DraftField::Author,
            DraftField::Year,
            DraftField::Genre,
            DraftField::Isbn,
            DraftField::CoverUrl,
        ] {
            for blank in ["", "   ", "\t\n"] {
                let mut draft = valid_draft();
                draft.set(field, blank.to_string());
                assert_eq!(
                    draft.validate(),
                    Err(ValidationError::MissingField),
                    "field {:?} = {:?}",
                    field,
                    blank
                );
            }
        }
    }

    #[test]
    fn test_missing_field_wins_over_other_errors() {
        let draft = BookDraft {
            title: String::new(),
            year: "abc".to_string(),
            isbn: "1".to_string(),
            cover_url: "ftp://x".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_invalid_years() {
        for year in ["0", "-5", "abc", "19 65", " 1965", "99999999999"] {
            let draft = BookDraft {
                year: year.to_string(),
                ..valid_draft()
            };
            assert_eq!(draft.validate(), Err(ValidationError::InvalidYear), "{year}");
        }
    }

    #[test]
    fn test_year_checked_before_isbn() {
        let draft = BookDraft {
            year: "0".to_string(),
            isbn: "123".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_isbn_length_bounds() {
        let cases = [
            ("123456789", false),
            ("1234567890", true),
            ("1234567890123", true),
            ("12345678901234", false),
        ];
        for (isbn, ok) in cases {
            let draft = BookDraft {
                isbn: isbn.to_string(),
                ..valid_draft()
            };
            if ok {
                assert!(draft.validate().is_ok(), "{isbn}");
            } else {
                assert_eq!(draft.validate(), Err(ValidationError::InvalidIsbnLength), "{isbn}");
            }
        }
    }

    #[test]
    fn test_cover_url_scheme() {
        let ftp = BookDraft {
            cover_url: "ftp://x.png".to_string(),
            ..valid_draft()
        };
        assert_eq!(ftp.validate(), Err(ValidationError::InvalidCoverUrlScheme));

        let upper = BookDraft {
            cover_url: "HTTP://x.png".to_string(),
            ..valid_draft()
        };
        assert!(upper.validate().is_ok());

        let https = BookDraft {
            cover_url: "https://covers.openlibrary.org/b/isbn/9780441013593-M.jpg".to_string(),
            ..valid_draft()
        };
        assert!(https.validate().is_ok());
    }

    #[test]
    fn test_http_prefix_handles_short_and_multibyte_input() {
        assert!(!has_http_prefix("htt"));
        assert!(!has_http_prefix("ééé"));
        assert!(has_http_prefix("hTtP"));
    }

    #[test]
    fn test_matches_is_case_insensitive_on_title_or_author() {
        let book = valid_draft().validate().unwrap();
        assert!(book.matches(""));
        assert!(book.matches("dUNE"));
        assert!(book.matches("herb"));
        assert!(!book.matches("sci-fi"));
    }
}
