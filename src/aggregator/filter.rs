//! Record selection by continent and entity.

use crate::parser::{Entity, Metric, RankedEntity, Record};
use crate::utils::config::ALL_CONTINENTS;
use log::debug;

/// Keep records whose continent equals `continent`
///
/// `"All"` is a pass-through: every record is returned in its original order.
pub fn filter_by_continent<'a, I>(records: I, continent: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if continent == ALL_CONTINENTS {
        return records.into_iter().collect();
    }

    let subset: Vec<&Record> = records
        .into_iter()
        .filter(|record| record.continent.as_deref() == Some(continent))
        .collect();

    debug!("Continent {}: {} records", continent, subset.len());
    subset
}

/// Most recent record of an entity
///
/// When several records share the latest date, the last one in input order
/// wins. Returns `None` when the entity has no records at all.
pub fn latest_record<'a, I>(records: I, entity: &Entity) -> Option<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| entity.matches(record))
        .max_by_key(|record| record.date)
}

/// First non-missing population figure of an entity
pub fn population_of<'a, I>(records: I, entity: &Entity) -> Option<f64>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| entity.matches(record))
        .find_map(|record| record.value(Metric::Population))
}

/// Entities drawn on the vaccination timeline
///
/// For `"All"`: the world first, then every other aggregate except income
/// groups in order of first appearance. For a continent: the continent's own
/// aggregate (when the dataset has one) followed by the first
/// `top_countries` entries of `ranking`.
pub fn timeline_entities<'a, I>(
    records: I,
    continent: &str,
    ranking: &[RankedEntity],
    top_countries: usize,
) -> Vec<Entity>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut entities = Vec::new();

    if continent == ALL_CONTINENTS {
        let mut has_world = false;
        let mut others: Vec<Entity> = Vec::new();
        for record in records
            .into_iter()
            .filter(|r| r.is_aggregate() && !r.is_income_group())
        {
            if record.is_world() {
                has_world = true;
                continue;
            }
            let entity = Entity::Location(record.location.clone());
            if !others.contains(&entity) {
                others.push(entity);
            }
        }
        if has_world {
            entities.push(Entity::World);
        }
        entities.extend(others);
    } else {
        let has_aggregate = records
            .into_iter()
            .any(|record| record.is_aggregate() && record.location == continent);
        if has_aggregate {
            entities.push(Entity::Location(continent.to_string()));
        }
        entities.extend(
            ranking
                .iter()
                .take(top_countries)
                .map(|entry| Entity::Location(entry.location.clone())),
        );
    }

    entities
}
