use crate::domain::pet::{
    breeds::BreedRegistry,
    entities::{Measurement, PetProfile, PetValidationError},
    value_objects::PetDetails,
};

/// Validates a raw pet record against the reference breeds.
///
/// All checks run; the returned error lists every failure in the order
/// breed, age, weight.
pub fn validate_pet_details(
    registry: &BreedRegistry,
    details: &PetDetails,
) -> Result<PetProfile, PetValidationError> {
    let mut reasons = Vec::new();

    if !registry.contains(&details.species, &details.breed) {
        reasons.push(format!(
            "Invalid breed '{}' for {}",
            details.breed, details.species
        ));
    }

    let age = Measurement::from_json(&details.age);
    if age.is_none() {
        reasons.push("Age must be a number".to_string());
    }

    let weight = Measurement::from_json(&details.weight);
    if weight.is_none() {
        reasons.push("Weight must be a number".to_string());
    }

    match (age, weight) {
        (Some(age), Some(weight)) if reasons.is_empty() => Ok(PetProfile {
            name: details.name.clone(),
            breed: details.breed.clone(),
            age,
            gender: details.gender.clone(),
            species: details.species.clone(),
            weight,
            activity_level: details.activity_level.clone(),
            health_concerns: details.health_concerns.clone(),
        }),
        _ => Err(PetValidationError::new(reasons)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn details(species: &str, breed: &str) -> PetDetails {
        PetDetails {
            name: "Biscuit".to_string(),
            species: species.to_string(),
            breed: breed.to_string(),
            age: json!("3"),
            weight: json!("25"),
            ..PetDetails::default()
        }
    }

    #[test]
    fn test_valid_dog_passes_through_unchanged() {
        let registry = BreedRegistry::default();
        let input = details("Dog", "  golden retriever ");

        let profile = validate_pet_details(&registry, &input).unwrap();

        assert_eq!(profile.breed, "  golden retriever ");
        assert_eq!(profile.species, "Dog");
        assert_eq!(profile.age.value, 3.0);
        assert_eq!(profile.age.to_string(), "3");
        assert_eq!(profile.weight.value, 25.0);
        assert_eq!(profile.health_concerns, "None");
    }

    #[test]
    fn test_numeric_json_values_are_accepted() {
        let registry = BreedRegistry::default();
        let input = PetDetails {
            age: json!(2),
            weight: json!(4.5),
            ..details("cat", "Maine Coon")
        };

        let profile = validate_pet_details(&registry, &input).unwrap();

        assert_eq!(profile.age.to_string(), "2");
        assert_eq!(profile.weight.to_string(), "4.5");
    }

    #[test]
    fn test_default_numbers_are_valid() {
        let registry = BreedRegistry::default();
        let input = PetDetails {
            species: "cat".to_string(),
            breed: "Siamese".to_string(),
            ..PetDetails::default()
        };

        let profile = validate_pet_details(&registry, &input).unwrap();

        assert_eq!(profile.age.to_string(), "0");
        assert_eq!(profile.weight.to_string(), "0.0");
    }

    #[test]
    fn test_unknown_species_is_an_invalid_breed() {
        let registry = BreedRegistry::default();

        let err = validate_pet_details(&registry, &details("Fish", "Goldfish")).unwrap_err();

        assert_eq!(err.reasons, vec!["Invalid breed 'Goldfish' for Fish"]);
    }

    #[test]
    fn test_non_numeric_age_and_weight() {
        let registry = BreedRegistry::default();
        let input = PetDetails {
            age: json!("abc"),
            weight: json!("heavy"),
            ..details("dog", "Beagle")
        };

        let err = validate_pet_details(&registry, &input).unwrap_err();

        assert_eq!(
            err.reasons,
            vec!["Age must be a number", "Weight must be a number"]
        );
    }

    #[test]
    fn test_non_scalar_numbers_are_rejected() {
        let registry = BreedRegistry::default();
        let input = PetDetails {
            age: json!(null),
            weight: json!(true),
            ..details("dog", "Beagle")
        };

        let err = validate_pet_details(&registry, &input).unwrap_err();

        assert_eq!(err.reasons.len(), 2);
    }

    #[test]
    fn test_errors_accumulate_into_one_message() {
        let registry = BreedRegistry::default();
        let input = PetDetails {
            age: json!("abc"),
            ..details("dog", "Goldfish")
        };

        let err = validate_pet_details(&registry, &input).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid breed 'Goldfish' for dog\nAge must be a number"
        );
    }
}
