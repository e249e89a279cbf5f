//! Raw provider records.
//!
//! Fixture pages are stored in the photo provider's (Unsplash) list format. These
//! types mirror the subset of that format the gallery reads, and [`remap_photos`]
//! converts them into domain [`Photo`]s. Keeping them apart from the domain model
//! keeps provider field names out of the rest of the crate.

use crate::domain::{Photo, User};
use serde::{Deserialize, Serialize};

/// Image URLs of a provider photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
    pub thumb: String,
}

/// Avatar URLs of a provider user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub medium: String,
}

/// A provider user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    pub profile_image: ProfileImage,
}

/// A provider photo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderPhoto {
    pub id: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub user: ProviderUser,
}

impl ProviderPhoto {
    /// Converts the record into a domain photo.
    ///
    /// The description falls back to `alt_description`, then to
    /// `"Photo by <username>"`. Empty strings count as missing.
    #[must_use]
    pub fn into_photo(self) -> Photo {
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .or_else(|| self.alt_description.filter(|d| !d.trim().is_empty()))
            .unwrap_or_else(|| format!("Photo by {}", self.user.username));

        Photo {
            id: self.id,
            color: self.color,
            description,
            image_url: self.urls.regular,
            thumb_url: self.urls.thumb,
            user: User {
                id: self.user.id,
                name: self.user.name.unwrap_or_else(|| self.user.username.clone()),
                username: self.user.username,
                image_url: self.user.profile_image.medium,
            },
        }
    }
}

/// Remaps a provider page into domain photos, preserving order.
#[must_use]
pub fn remap_photos(records: Vec<ProviderPhoto>) -> Vec<Photo> {
    records.into_iter().map(ProviderPhoto::into_photo).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(description: Option<&str>, alt: Option<&str>) -> ProviderPhoto {
        ProviderPhoto {
            id: "p1".to_string(),
            color: "#262626".to_string(),
            description: description.map(String::from),
            alt_description: alt.map(String::from),
            urls: PhotoUrls {
                regular: "https://images.example/p1?w=1080".to_string(),
                thumb: "https://images.example/p1?w=200".to_string(),
            },
            user: ProviderUser {
                id: "u1".to_string(),
                username: "mira".to_string(),
                name: Some("Mira K".to_string()),
                profile_image: ProfileImage {
                    medium: "https://images.example/u1?s=64".to_string(),
                },
            },
        }
    }

    #[test]
    fn description_falls_back_in_order() {
        assert_eq!(record(Some("Dunes"), Some("sand")).into_photo().description, "Dunes");
        assert_eq!(record(None, Some("sand")).into_photo().description, "sand");
        assert_eq!(record(Some(""), None).into_photo().description, "Photo by mira");
    }

    #[test]
    fn urls_and_user_are_remapped() {
        let photo = record(None, None).into_photo();
        assert_eq!(photo.image_url, "https://images.example/p1?w=1080");
        assert_eq!(photo.thumb_url, "https://images.example/p1?w=200");
        assert_eq!(photo.user.name, "Mira K");
        assert_eq!(photo.user.image_url, "https://images.example/u1?s=64");
    }

    #[test]
    fn ignores_unknown_provider_fields() {
        let json = r##"[{
            "id": "q", "color": "#fff", "likes": 12, "description": null,
            "alt_description": "a bridge",
            "urls": {"raw": "r", "full": "f", "regular": "reg", "small": "s", "thumb": "t"},
            "user": {"id": "u", "username": "ed", "name": "Ed", "profile_image": {"small": "s", "medium": "m", "large": "l"}}
        }]"##;
        let records: Vec<ProviderPhoto> = serde_json::from_str(json).expect("provider page");
        let photos = remap_photos(records);
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].description, "a bridge");
        assert_eq!(photos[0].thumb_url, "t");
    }
}
