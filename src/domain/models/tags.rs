//! Resource tag maps

use std::collections::BTreeMap;

/// Tag key carrying a resource's derived name
pub const NAME_TAG: &str = "Name";

/// Ordered tag map applied to created resources
pub type Tags = BTreeMap<String, String>;

/// Copy `tags` with the `Name` tag set to `name`, overriding any caller-supplied value
#[must_use]
pub fn with_name_tag(tags: &Tags, name: &str) -> Tags {
    let mut tagged = tags.clone();
    tagged.insert(NAME_TAG.to_string(), name.to_string());
    tagged
}
