//! Classification rules.
//!
//! Each field is a first-match-wins scan over the aggregated structure.
//! "Connected" always means joined through a chain of complete channels.

use bodygraph_base::{Center, Profile, incarnation_cross};

use crate::activation::{ActivationSet, ChartBody, Origin};
use crate::classify_types::{
    Authority, Classification, Definition, HdType, Orientation, Variables,
};
use crate::structure::Structure;

/// Type from the defined centers and the Throat's motor connection.
pub fn classify_type(structure: &Structure) -> HdType {
    let sacral = structure.is_defined(Center::Sacral);
    let motor_to_throat = structure.throat_connected_to_motor();
    match (sacral, motor_to_throat) {
        (true, true) => HdType::ManifestingGenerator,
        (true, false) => HdType::Generator,
        (false, true) => HdType::Manifestor,
        (false, false) if structure.defined_centers().is_empty() => HdType::Reflector,
        (false, false) => HdType::Projector,
    }
}

/// Authority. Heart-to-Throat is tested before G-to-Throat.
pub fn classify_authority(structure: &Structure, hd_type: HdType) -> Authority {
    if structure.is_defined(Center::SolarPlexus) {
        Authority::Emotional
    } else if structure.is_defined(Center::Sacral) {
        Authority::Sacral
    } else if structure.is_defined(Center::Spleen) {
        Authority::Splenic
    } else if structure.connected(Center::Heart, Center::Throat) {
        Authority::Ego
    } else if structure.connected(Center::G, Center::Throat) {
        Authority::SelfProjected
    } else if structure.is_defined(Center::Heart) {
        Authority::EgoProjected
    } else if hd_type == HdType::Projector {
        Authority::Mental
    } else {
        Authority::Lunar
    }
}

/// Definition from the number of connected groups.
pub fn classify_definition(structure: &Structure) -> Definition {
    Definition::from_components(structure.components().len())
}

/// Personality Sun line over Design Sun line.
pub fn classify_profile(activations: &ActivationSet) -> Profile {
    Profile::new(
        activations.get(Origin::Personality, ChartBody::Sun).unit.line,
        activations.get(Origin::Design, ChartBody::Sun).unit.line,
    )
}

pub fn classify_variables(activations: &ActivationSet) -> Variables {
    let tone = |origin, body| Orientation::from_tone(activations.get(origin, body).unit.tone);
    Variables {
        digestion: tone(Origin::Design, ChartBody::Sun),
        environment: tone(Origin::Design, ChartBody::NorthNode),
        motivation: tone(Origin::Personality, ChartBody::Sun),
        perspective: tone(Origin::Personality, ChartBody::NorthNode),
    }
}

/// Run every rule.
pub fn classify(structure: &Structure, activations: &ActivationSet) -> Classification {
    let hd_type = classify_type(structure);
    let p_sun = activations.get(Origin::Personality, ChartBody::Sun);
    let gates = [
        p_sun.gate(),
        activations.get(Origin::Personality, ChartBody::Earth).gate(),
        activations.get(Origin::Design, ChartBody::Sun).gate(),
        activations.get(Origin::Design, ChartBody::Earth).gate(),
    ];

    Classification {
        hd_type,
        strategy: hd_type.strategy(),
        authority: classify_authority(structure, hd_type),
        profile: classify_profile(activations),
        definition: classify_definition(structure),
        incarnation_cross: incarnation_cross(p_sun.unit.line, gates),
        variables: classify_variables(activations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::aggregate;
    use std::collections::BTreeSet;

    fn structure(list: &[u8]) -> Structure {
        let set: BTreeSet<u8> = list.iter().copied().collect();
        aggregate(&set)
    }

    #[test]
    fn reflector_when_nothing_defined() {
        let s = structure(&[1, 3, 5]);
        assert_eq!(classify_type(&s), HdType::Reflector);
        assert_eq!(classify_authority(&s, HdType::Reflector), Authority::Lunar);
        assert_eq!(classify_definition(&s), Definition::None);
    }

    #[test]
    fn generator_without_throat_motor() {
        // 34-57 Sacral/Spleen.
        let s = structure(&[34, 57]);
        assert_eq!(classify_type(&s), HdType::Generator);
        assert_eq!(classify_authority(&s, HdType::Generator), Authority::Sacral);
    }

    #[test]
    fn manifesting_generator_via_sacral_g_throat() {
        // 34-10 Sacral/G, 10-20 G/Throat.
        let s = structure(&[34, 10, 20]);
        assert_eq!(classify_type(&s), HdType::ManifestingGenerator);
    }

    #[test]
    fn manifestor_heart_to_throat() {
        // 21-45 Heart/Throat.
        let s = structure(&[21, 45]);
        assert_eq!(classify_type(&s), HdType::Manifestor);
        assert_eq!(classify_authority(&s, HdType::Manifestor), Authority::Ego);
    }

    #[test]
    fn projector_self_projected() {
        // 13-33 G/Throat, no motor.
        let s = structure(&[13, 33]);
        assert_eq!(classify_type(&s), HdType::Projector);
        assert_eq!(
            classify_authority(&s, HdType::Projector),
            Authority::SelfProjected
        );
    }

    #[test]
    fn projector_ego_projected() {
        // 25-51 G/Heart, Throat not reached.
        let s = structure(&[25, 51]);
        assert_eq!(classify_type(&s), HdType::Projector);
        assert_eq!(
            classify_authority(&s, HdType::Projector),
            Authority::EgoProjected
        );
    }

    #[test]
    fn projector_mental() {
        // 64-47 Head/Ajna.
        let s = structure(&[64, 47]);
        assert_eq!(classify_type(&s), HdType::Projector);
        assert_eq!(classify_authority(&s, HdType::Projector), Authority::Mental);
        assert_eq!(classify_definition(&s), Definition::Single);
    }

    #[test]
    fn emotional_wins_over_sacral() {
        // 6-59 Solar Plexus/Sacral.
        let s = structure(&[6, 59]);
        assert_eq!(
            classify_authority(&s, classify_type(&s)),
            Authority::Emotional
        );
    }

    #[test]
    fn ego_checked_before_self_projected() {
        // 21-45 Heart/Throat and 13-33 G/Throat.
        let s = structure(&[21, 45, 13, 33]);
        assert_eq!(classify_authority(&s, classify_type(&s)), Authority::Ego);
    }

    #[test]
    fn split_definition() {
        let s = structure(&[64, 47, 34, 57]);
        assert_eq!(classify_definition(&s), Definition::Split);
    }
}
