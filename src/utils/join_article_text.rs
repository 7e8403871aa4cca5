/// Concatenates the available article fields into one text blob, separated by
/// single spaces. Missing and empty fields are skipped.
pub fn join_article_text(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .flatten()
        .filter(|field| !field.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(" ")
}
