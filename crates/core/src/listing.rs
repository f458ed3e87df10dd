//! Grouping of venues by the area (city and state) they are located in.

use std::collections::HashMap;

use serde::Serialize;

/// Anything that sits in a city and state.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

/// All items sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaGroup<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items by exact (city, state) pair.
///
/// Groups come out in order of first appearance and items keep their
/// relative order inside a group. No pair appears in more than one group.
pub fn group_by_area<T, I>(items: I) -> Vec<AreaGroup<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut groups: Vec<AreaGroup<T>> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for item in items {
        let key = (item.city().to_string(), item.state().to_string());
        match index.get(&key) {
            Some(&slot) => groups[slot].venues.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(AreaGroup {
                    city: key.0,
                    state: key.1,
                    venues: vec![item],
                });
            }
        }
    }

    groups
}
