use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Serialize, Debug, Clone)]
pub struct HeadlineStat {
    pub value: i64,
    pub suffix: String,
    pub label: String,
}

impl HeadlineStat {
    pub fn new(value: i64, suffix: &str, label: &str) -> Self {
        Self {
            value,
            suffix: suffix.into(),
            label: label.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: String,
    pub avatar: String,
    pub rating: i32,
}

impl Testimonial {
    pub fn new(content: &str, author: &str, role: &str) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            role: role.into(),
            avatar: crate::utils::generator::initials(author),
            rating: 5,
        }
    }
}
