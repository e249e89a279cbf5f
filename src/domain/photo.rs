//! Photo and user domain model.
//!
//! A [`Photo`] is the unit the gallery displays: a full-size image, a grid
//! thumbnail, a placeholder colour and the photographer it is attributed to.
//! Photos are immutable once fetched; selection compares them by `id` only.

use serde::{Deserialize, Serialize};

/// The photographer a photo is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub image_url: String,
}

/// A single displayable photo record.
///
/// The wire format uses camelCase keys (`imageUrl`, `thumbUrl`), matching the
/// photos endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    /// Placeholder swatch shown while the image loads, as `#rrggbb`.
    pub color: String,
    #[serde(default)]
    pub description: String,
    /// Full-size image URL used by the preview.
    pub image_url: String,
    /// Thumbnail URL used by the grid.
    pub thumb_url: String,
    pub user: User,
}

impl Photo {
    /// Returns `true` when both photos have the same identity.
    ///
    /// Only `id` takes part; every other field may differ between two fetches
    /// of the same photo.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Parses the placeholder colour into RGB components.
    ///
    /// Accepts `#rrggbb` and `#rgb`. Returns `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gallerist::domain::{Photo, User};
    /// # let user = User { id: "u".into(), username: "u".into(), name: "U".into(), image_url: String::new() };
    /// let photo = Photo {
    ///     id: "a".into(),
    ///     color: "#0c2640".into(),
    ///     description: String::new(),
    ///     image_url: String::new(),
    ///     thumb_url: String::new(),
    ///     user,
    /// };
    /// assert_eq!(photo.swatch_rgb(), Some((0x0c, 0x26, 0x40)));
    /// ```
    #[must_use]
    pub fn swatch_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some((r, g, b))
            }
            3 => {
                let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some((channels.next()??, channels.next()??, channels.next()??))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, color: &str) -> Photo {
        Photo {
            id: id.to_string(),
            color: color.to_string(),
            description: format!("photo {id}"),
            image_url: format!("https://img.example/{id}/regular"),
            thumb_url: format!("https://img.example/{id}/thumb"),
            user: User {
                id: "u1".to_string(),
                username: "ansel".to_string(),
                name: "Ansel".to_string(),
                image_url: "https://img.example/u1/avatar".to_string(),
            },
        }
    }

    #[test]
    fn identity_ignores_everything_but_id() {
        let a = photo("a", "#000000");
        let mut refetched = photo("a", "#ffffff");
        refetched.description = "changed".to_string();
        assert!(a.same_as(&refetched));
        assert!(!a.same_as(&photo("b", "#000000")));
    }

    #[test]
    fn swatch_parses_short_and_long_forms() {
        assert_eq!(photo("a", "#fff").swatch_rgb(), Some((255, 255, 255)));
        assert_eq!(photo("a", "#102030").swatch_rgb(), Some((0x10, 0x20, 0x30)));
        assert_eq!(photo("a", "teal").swatch_rgb(), None);
        assert_eq!(photo("a", "#12345").swatch_rgb(), None);
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r##"{
            "id": "x1",
            "color": "#a0a0a0",
            "description": "A lake",
            "imageUrl": "https://img.example/x1/regular",
            "thumbUrl": "https://img.example/x1/thumb",
            "user": {"id": "u9", "username": "lee", "name": "Lee", "imageUrl": "https://img.example/u9"}
        }"##;
        let photo: Photo = serde_json::from_str(json).expect("valid photo");
        assert_eq!(photo.thumb_url, "https://img.example/x1/thumb");
        assert_eq!(photo.user.username, "lee");
    }
}
