use crate::Error;

/// Entity spans found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedEntities {
    pub organizations: Vec<String>,
    pub people: Vec<String>,
    pub proper_nouns: Vec<String>,
}

/// Pluggable organization / person / proper-noun tagging.
///
/// Any tagging backend can drive entity matching by implementing this trait.
/// Errors are never fatal to an extraction: the caller treats them as "no
/// entities found".
pub trait EntityTagger: Send + Sync {
    fn tag_organizations(&self, text: &str) -> Result<Vec<String>, Error>;

    fn tag_people(&self, text: &str) -> Result<Vec<String>, Error>;

    fn tag_proper_nouns(&self, text: &str) -> Result<Vec<String>, Error>;

    /// Tags all three kinds at once. Implementations that scan the text once
    /// for everything should override this.
    fn tag_entities(&self, text: &str) -> Result<TaggedEntities, Error> {
        Ok(TaggedEntities {
            organizations: self.tag_organizations(text)?,
            people: self.tag_people(text)?,
            proper_nouns: self.tag_proper_nouns(text)?,
        })
    }
}
