//! Random partition into groups

use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Smallest allowed group
pub const MIN_GROUP_SIZE: usize = 2;

/// Split `names` into `group_count` groups of exactly `group_size`.
///
/// The names are shuffled with a uniform Fisher-Yates shuffle first. Names
/// beyond `group_size * group_count` are left out of every group.
pub fn partition<R: Rng + ?Sized>(
    names: &[String],
    group_size: usize,
    group_count: usize,
    rng: &mut R,
) -> Result<Vec<Vec<String>>, DomainError> {
    if group_size < MIN_GROUP_SIZE {
        return Err(DomainError::InvalidGroupParameters(format!(
            "group size must be at least {MIN_GROUP_SIZE}, got {group_size}"
        )));
    }
    if group_count < 1 {
        return Err(DomainError::InvalidGroupParameters(
            "at least one group is required".into(),
        ));
    }
    let needed = group_size.saturating_mul(group_count);
    if needed > names.len() {
        return Err(DomainError::InvalidGroupParameters(format!(
            "{group_count} groups of {group_size} need {needed} names, only {} available ({} short)",
            names.len(),
            needed - names.len()
        )));
    }

    let mut shuffled = names.to_vec();
    shuffled.shuffle(rng);

    Ok(shuffled[..needed]
        .chunks_exact(group_size)
        .map(<[String]>::to_vec)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Student {i}")).collect()
    }

    #[test]
    fn test_fifteen_into_three_groups_of_four() {
        let input = names(15);
        let mut rng = StdRng::seed_from_u64(11);
        let groups = partition(&input, 4, 3, &mut rng).unwrap();

        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 4));

        let used: Vec<&String> = groups.iter().flatten().collect();
        let unique: HashSet<&String> = used.iter().copied().collect();
        assert_eq!(used.len(), 12);
        assert_eq!(unique.len(), 12);
        assert!(used.iter().all(|n| input.contains(n)));
    }

    #[test]
    fn test_insufficient_names() {
        let err = partition(&names(5), 3, 2, &mut StdRng::seed_from_u64(0)).unwrap_err();
        match err {
            DomainError::InvalidGroupParameters(msg) => {
                assert!(msg.contains("need 6"));
                assert!(msg.contains("only 5"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_size_and_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            partition(&names(10), 1, 2, &mut rng),
            Err(DomainError::InvalidGroupParameters(_))
        ));
        assert!(matches!(
            partition(&names(10), 2, 0, &mut rng),
            Err(DomainError::InvalidGroupParameters(_))
        ));
    }

    #[test]
    fn test_exact_fit_uses_everyone() {
        let input = names(6);
        let groups = partition(&input, 3, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        let mut used: Vec<String> = groups.into_iter().flatten().collect();
        used.sort();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(used, expected);
    }

    #[test]
    fn test_shuffle_reaches_every_first_slot() {
        let input = names(4);
        let mut rng = StdRng::seed_from_u64(99);
        let mut leaders = HashSet::new();
        for _ in 0..200 {
            let groups = partition(&input, 2, 2, &mut rng).unwrap();
            leaders.insert(groups[0][0].clone());
        }
        assert_eq!(leaders.len(), 4);
    }
}
