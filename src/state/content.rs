//! Read-only content records served by the backend

use serde::{Deserialize, Serialize};

/// A service the company offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    /// Symbolic icon name, see [`ServiceIcon`]
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Photo URL, when the backend provides one
    #[serde(default)]
    pub image: Option<String>,
}

impl Service {
    pub fn icon(&self) -> ServiceIcon {
        ServiceIcon::from_name(&self.icon)
    }
}

/// Fixed set of icon names the backend may send for a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceIcon {
    #[default]
    TreeDeciduous,
    Scissors,
    CircleDot,
    AlertTriangle,
    Mountain,
}

impl ServiceIcon {
    /// Look up an icon by name. Unknown names fall back to the tree.
    pub fn from_name(name: &str) -> Self {
        match name {
            "TreeDeciduous" => Self::TreeDeciduous,
            "Scissors" => Self::Scissors,
            "CircleDot" => Self::CircleDot,
            "AlertTriangle" => Self::AlertTriangle,
            "Mountain" => Self::Mountain,
            _ => Self::default(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::TreeDeciduous => "♣",
            Self::Scissors => "✂",
            Self::CircleDot => "◉",
            Self::AlertTriangle => "⚠",
            Self::Mountain => "▲",
        }
    }
}

/// A customer review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    /// 1-5
    pub rating: u8,
    pub review: String,
    pub name: String,
    pub location: String,
    pub service: String,
    pub date: String,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// Rating clamped into 1..=5
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, Self::MAX_RATING)
    }

    /// Filled stars followed by empty ones, always five wide
    pub fn star_line(&self) -> String {
        let filled = self.stars() as usize;
        let empty = Self::MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// A project photo in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(rating: u8) -> Testimonial {
        Testimonial {
            id: "1".to_string(),
            rating,
            review: "Great work".to_string(),
            name: "Sarah Mitchell".to_string(),
            location: "Portland, OR".to_string(),
            service: "Tree Removal".to_string(),
            date: "December 2024".to_string(),
        }
    }

    #[test]
    fn test_icon_lookup_known_names() {
        assert_eq!(ServiceIcon::from_name("Scissors"), ServiceIcon::Scissors);
        assert_eq!(ServiceIcon::from_name("CircleDot"), ServiceIcon::CircleDot);
        assert_eq!(
            ServiceIcon::from_name("AlertTriangle"),
            ServiceIcon::AlertTriangle
        );
        assert_eq!(ServiceIcon::from_name("Mountain"), ServiceIcon::Mountain);
    }

    #[test]
    fn test_icon_lookup_falls_back_to_tree() {
        assert_eq!(ServiceIcon::from_name("Chainsaw"), ServiceIcon::TreeDeciduous);
        assert_eq!(ServiceIcon::from_name(""), ServiceIcon::TreeDeciduous);
        // Case matters, same as the backend's names
        assert_eq!(ServiceIcon::from_name("scissors"), ServiceIcon::TreeDeciduous);
    }

    #[test]
    fn test_service_deserializes_without_image() {
        let json = r#"{"id":"1","icon":"Mountain","title":"Land Clearing","description":"Site prep"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert!(service.image.is_none());
        assert_eq!(service.icon(), ServiceIcon::Mountain);
    }

    #[test]
    fn test_service_ignores_unknown_fields() {
        let json = r#"{"id":"1","icon":"X","title":"T","description":"D","extra":42}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.icon(), ServiceIcon::TreeDeciduous);
    }

    #[test]
    fn test_star_line() {
        assert_eq!(testimonial(5).star_line(), "★★★★★");
        assert_eq!(testimonial(3).star_line(), "★★★☆☆");
    }

    #[test]
    fn test_stars_are_clamped() {
        assert_eq!(testimonial(0).stars(), 1);
        assert_eq!(testimonial(9).stars(), 5);
        assert_eq!(testimonial(9).star_line(), "★★★★★");
    }

    #[test]
    fn test_gallery_item_deserializes() {
        let json = r#"{"id":"4","title":"Heritage Tree Pruning","description":"Maple","image_url":"https://example.com/a.jpg","category":"Tree Trimming"}"#;
        let item: GalleryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, "Tree Trimming");
    }
}
