//! Conversions between persistence and transport forms.
//!
//! Both forms carry the same fields, so every conversion is a plain copy.

use super::dto::{RegionDto, WalkDifficultyDto, WalkDto};
use crate::domain::{Region, Walk, WalkDifficulty};

/// Maps a list of entities into their other form.
pub fn map_list<S, T>(items: Vec<S>) -> Vec<T>
where
    T: From<S>,
{
    items.into_iter().map(T::from).collect()
}

// =============================================================================
// Region
// =============================================================================

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        }
    }
}

impl From<RegionDto> for Region {
    fn from(dto: RegionDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            area: dto.area,
            lat: dto.lat,
            long: dto.long,
            population: dto.population,
        }
    }
}

// =============================================================================
// Walk Difficulty
// =============================================================================

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(walk_difficulty: WalkDifficulty) -> Self {
        Self {
            id: walk_difficulty.id,
            code: walk_difficulty.code,
        }
    }
}

impl From<WalkDifficultyDto> for WalkDifficulty {
    fn from(dto: WalkDifficultyDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
        }
    }
}

// =============================================================================
// Walk
// =============================================================================

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            length: walk.length,
            region_id: walk.region_id,
            walk_difficulty_id: walk.walk_difficulty_id,
        }
    }
}

impl From<WalkDto> for Walk {
    fn from(dto: WalkDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            length: dto.length,
            region_id: dto.region_id,
            walk_difficulty_id: dto.walk_difficulty_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RegionId, WalkDifficultyId, WalkId};
    use proptest::prelude::*;
    use rstest::rstest;
    use uuid::Uuid;

    fn uuid_strategy() -> impl Strategy<Value = Uuid> {
        any::<u128>().prop_map(Uuid::from_u128)
    }

    fn region_strategy() -> impl Strategy<Value = Region> {
        (
            uuid_strategy(),
            "[A-Z]{3}",
            ".{0,40}",
            any::<f64>(),
            -90.0..90.0f64,
            -180.0..180.0f64,
            0..i64::MAX,
        )
            .prop_map(|(id, code, name, area, lat, long, population)| Region {
                id: RegionId::from_uuid(id),
                code,
                name,
                area,
                lat,
                long,
                population,
            })
    }

    fn walk_strategy() -> impl Strategy<Value = Walk> {
        (
            uuid_strategy(),
            ".{0,40}",
            0.0..1_000.0f64,
            uuid_strategy(),
            uuid_strategy(),
        )
            .prop_map(|(id, name, length, region_id, walk_difficulty_id)| Walk {
                id: WalkId::from_uuid(id),
                name,
                length,
                region_id: RegionId::from_uuid(region_id),
                walk_difficulty_id: WalkDifficultyId::from_uuid(walk_difficulty_id),
            })
    }

    proptest! {
        #[test]
        fn prop_region_round_trip_preserves_fields(region in region_strategy()) {
            let round_trip = Region::from(RegionDto::from(region.clone()));
            prop_assert_eq!(round_trip.id, region.id);
            prop_assert_eq!(&round_trip.code, &region.code);
            prop_assert_eq!(&round_trip.name, &region.name);
            prop_assert_eq!(round_trip.area.to_bits(), region.area.to_bits());
            prop_assert_eq!(round_trip.lat.to_bits(), region.lat.to_bits());
            prop_assert_eq!(round_trip.long.to_bits(), region.long.to_bits());
            prop_assert_eq!(round_trip.population, region.population);
        }

        #[test]
        fn prop_walk_round_trip_preserves_fields(walk in walk_strategy()) {
            let round_trip = Walk::from(WalkDto::from(walk.clone()));
            prop_assert_eq!(round_trip, walk);
        }
    }

    #[rstest]
    fn test_walk_difficulty_round_trip() {
        let walk_difficulty = WalkDifficulty {
            id: WalkDifficultyId::generate(),
            code: "Medium".to_string(),
        };

        let dto = WalkDifficultyDto::from(walk_difficulty.clone());

        assert_eq!(dto.id, walk_difficulty.id);
        assert_eq!(dto.code, "Medium");
        assert_eq!(WalkDifficulty::from(dto), walk_difficulty);
    }

    #[rstest]
    fn test_map_list_preserves_order() {
        let difficulties: Vec<WalkDifficulty> = ["Easy", "Medium", "Hard"]
            .into_iter()
            .map(|code| WalkDifficulty {
                id: WalkDifficultyId::generate(),
                code: code.to_string(),
            })
            .collect();

        let dtos: Vec<WalkDifficultyDto> = map_list(difficulties);

        let codes: Vec<&str> = dtos.iter().map(|dto| dto.code.as_str()).collect();
        assert_eq!(codes, vec!["Easy", "Medium", "Hard"]);
        assert!(map_list::<WalkDifficulty, WalkDifficultyDto>(Vec::new()).is_empty());
    }
}
