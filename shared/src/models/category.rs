//! Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{DomainError, DomainResult};

/// Depth of a category in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum CategoryLevel {
    /// Main category (root)
    Main = 1,
    /// Sub category
    Sub = 2,
    /// Sub-sub category (leaf)
    SubSub = 3,
}

impl CategoryLevel {
    /// Level one step closer to the root, `None` for main categories
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Main => None,
            Self::Sub => Some(Self::Main),
            Self::SubSub => Some(Self::Sub),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<CategoryLevel> for u8 {
    fn from(level: CategoryLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for CategoryLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Main),
            2 => Ok(Self::Sub),
            3 => Ok(Self::SubSub),
            other => Err(format!("category level must be 1, 2 or 3, got {}", other)),
        }
    }
}

/// Category entity, as returned by `/categories` (nested tree)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub level: CategoryLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}

impl Category {
    /// Leaf node without children
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: CategoryLevel) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            parent_id: None,
            sub_categories: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.sub_categories = children;
        self
    }
}

/// Create category payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub level: CategoryLevel,
}

impl CategoryCreate {
    pub fn main(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
            level: CategoryLevel::Main,
        }
    }

    pub fn child(name: impl Into<String>, parent_id: impl Into<String>, level: CategoryLevel) -> Self {
        Self {
            name: name.into(),
            parent_id: Some(parent_id.into()),
            level,
        }
    }

    /// Level/parent consistency, independent of any tree
    pub fn check_shape(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("category name must not be blank"));
        }
        match (self.level, &self.parent_id) {
            (CategoryLevel::Main, Some(_)) => Err(DomainError::InvalidCategoryParent(
                "main categories cannot have a parent".to_string(),
            )),
            (CategoryLevel::Sub | CategoryLevel::SubSub, None) => {
                Err(DomainError::InvalidCategoryParent(format!(
                    "level {} categories require a parent",
                    self.level.as_u8()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Checks that the parent exists in `tree` exactly one level up
    pub fn validate_against(&self, tree: &[Category]) -> DomainResult<()> {
        self.check_shape()?;
        let (Some(parent_id), Some(expected)) = (&self.parent_id, self.level.parent()) else {
            return Ok(());
        };
        match crate::catalog::find_category(tree, parent_id) {
            Some(parent) if parent.level == expected => Ok(()),
            Some(parent) => Err(DomainError::InvalidCategoryParent(format!(
                "parent {} is level {}, expected level {}",
                parent_id,
                parent.level.as_u8(),
                expected.as_u8()
            ))),
            None => Err(DomainError::InvalidCategoryParent(format!(
                "parent {} not found",
                parent_id
            ))),
        }
    }
}

/// Update category payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CategoryLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_level_serde() {
        let cat: Category = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Phones",
            "level": 1,
            "subCategories": [
                {"id": "c2", "name": "Android", "level": 2, "parentId": "c1"}
            ]
        }))
        .unwrap();
        assert_eq!(cat.id, "c1");
        assert_eq!(cat.level, CategoryLevel::Main);
        assert_eq!(cat.sub_categories[0].parent_id.as_deref(), Some("c1"));

        let bad = serde_json::from_value::<Category>(json!({
            "id": "x", "name": "x", "level": 4
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_create_payload_wire_format() {
        let body = serde_json::to_value(CategoryCreate::child("Android", "c1", CategoryLevel::Sub)).unwrap();
        assert_eq!(body, json!({"name": "Android", "parentId": "c1", "level": 2}));

        let body = serde_json::to_value(CategoryCreate::main("Phones")).unwrap();
        assert_eq!(body, json!({"name": "Phones", "level": 1}));
    }

    #[test]
    fn test_check_shape() {
        assert!(CategoryCreate::main("Phones").check_shape().is_ok());
        assert!(CategoryCreate::main("  ").check_shape().is_err());

        let mut bad = CategoryCreate::main("Phones");
        bad.parent_id = Some("c0".into());
        assert!(matches!(bad.check_shape(), Err(DomainError::InvalidCategoryParent(_))));

        let orphan = CategoryCreate {
            name: "Android".into(),
            parent_id: None,
            level: CategoryLevel::Sub,
        };
        assert!(orphan.check_shape().is_err());
    }

    #[test]
    fn test_validate_against_tree() {
        let tree = vec![Category::new("c1", "Phones", CategoryLevel::Main).with_children(vec![
            Category::new("c2", "Android", CategoryLevel::Sub).with_parent("c1"),
        ])];

        assert!(CategoryCreate::child("Pixel", "c2", CategoryLevel::SubSub)
            .validate_against(&tree)
            .is_ok());
        // parent at the wrong depth
        assert!(CategoryCreate::child("Pixel", "c1", CategoryLevel::SubSub)
            .validate_against(&tree)
            .is_err());
        assert!(CategoryCreate::child("Pixel", "missing", CategoryLevel::Sub)
            .validate_against(&tree)
            .is_err());
    }

    #[test]
    fn test_validator_rejects_empty_name() {
        assert!(CategoryCreate::main("").validate().is_err());
        assert!(CategoryCreate::main("Phones").validate().is_ok());
    }
}
