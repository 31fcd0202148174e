use crate::repository::Horse;

/// Horses whose searchable text contains `query`, ignoring case and surrounding whitespace.
///
/// A blank query matches everything. Matching is plain substring containment over name, sex,
/// breed, life number, role and GP score; order is preserved.
pub fn filter<'a>(horses: &'a [Horse], query: &str) -> Vec<&'a Horse> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return horses.iter().collect();
    }

    horses
        .iter()
        .filter(|h| haystack(h).contains(&query))
        .collect()
}

fn haystack(horse: &Horse) -> String {
    let score = horse.gp_overall.to_string();

    [
        horse.name.as_str(),
        horse.sex.as_str(),
        horse.breed.as_str(),
        horse.life_number.as_str(),
        horse.role.as_ref().map(|r| r.as_str()).unwrap_or_default(),
        score.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}
