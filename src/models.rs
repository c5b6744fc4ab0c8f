//! Frontend Models
//!
//! Data structures matching the inventory API payloads.

use serde::{Deserialize, Serialize};

/// Inventory item as returned by the API (server field spelling)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub item_code: String,
    pub item_name: String,
    pub rack_no: String,
    pub quantity: u32,
    pub image_filename: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// One page of the item list
///
/// `items` holds only the requested page/filter combination, never a merge
/// of pages. `total_pages` is 0 when nothing matches the filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl ItemPage {
    /// "Previous" is allowed strictly above page 1
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// "Next" is allowed strictly below the last page
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Slim row returned by the live-search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub item_code: String,
    pub item_name: String,
    pub description: Option<String>,
}

/// Mutable form buffer for create and edit
///
/// Serialized as the JSON `data` part of the multipart request. A staged
/// image file is kept next to the draft by the owning form, never inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemDraft {
    pub item_code: String,
    pub item_name: String,
    pub rack_no: String,
    pub quantity: u32,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_server_spelling() {
        let json = r#"{
            "items": [{
                "id": 7,
                "item_code": "SKU-1",
                "item_name": "Hex bolts",
                "rack_no": "R-12",
                "quantity": 40,
                "image_filename": null,
                "description": null,
                "created_at": "Tue, 19 Aug 2026 10:11:12 GMT"
            }],
            "currentPage": 2,
            "totalPages": 5
        }"#;
        let page: ItemPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.items[0].item_code, "SKU-1");
        assert_eq!(page.items[0].image_filename, None);
    }

    #[test]
    fn page_boundaries_disable_navigation() {
        let mut page = ItemPage { items: vec![], current_page: 1, total_pages: 3 };
        assert!(!page.has_prev());
        assert!(page.has_next());

        page.current_page = 3;
        assert!(page.has_prev());
        assert!(!page.has_next());

        // Empty result set: server reports totalPages 0, both directions closed
        page.current_page = 1;
        page.total_pages = 0;
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn draft_serializes_server_keys() {
        let draft = ItemDraft {
            item_code: "SKU-9".into(),
            item_name: "Washers".into(),
            rack_no: "R-3".into(),
            quantity: 120,
            description: String::new(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("item_code"));
        assert!(obj.contains_key("item_name"));
        assert!(obj.contains_key("rack_no"));
        assert!(obj.contains_key("quantity"));
        assert!(obj.contains_key("description"));
        assert_eq!(obj["quantity"], 120);
    }

    #[test]
    fn search_hit_tolerates_null_description() {
        let json = r#"[
            {"item_code": "SKU-2", "item_name": "Nuts", "description": null},
            {"item_code": "SKU-3", "item_name": "Bolts", "description": "M8, zinc"}
        ]"#;
        let hits: Vec<SearchHit> = serde_json::from_str(json).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].description, None);
        assert_eq!(hits[1].description.as_deref(), Some("M8, zinc"));
    }
}
