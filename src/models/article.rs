/// The raw text fields of one news document, any of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl Article {
    pub fn new(title: Option<&str>, description: Option<&str>, content: Option<&str>) -> Self {
        Article {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            content: content.map(str::to_string),
        }
    }
}
