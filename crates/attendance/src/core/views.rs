// Pure derived views over the participant collection.
//
// Purpose
// - Compute the name-filtered subsequence and the perfect-attendance
//   subsequence from the current snapshot.
//
// Responsibilities
// - Preserve input ordering. Never cache: callers recompute on every
//   state change.
// - Never perform input or output.

use crate::core::participant::Participant;

/// Case-insensitive substring match of the trimmed term against each name.
/// A term that trims to empty selects everything.
pub fn filter_by_name(participants: &[Participant], term: &str) -> Vec<Participant> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return participants.to_vec();
    }
    participants
        .iter()
        .filter(|participant| participant.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Participants whose attendance vector contains no `false` slot. A
/// zero-length vector is vacuously perfect.
pub fn perfect_attendance(participants: &[Participant]) -> Vec<Participant> {
    participants
        .iter()
        .filter(|participant| participant.has_perfect_attendance())
        .cloned()
        .collect()
}

#[cfg(test)]
mod views_tests {
    use super::*;
    use crate::test_support::fixtures::participants::{ParticipantBuilder, make_roster};
    use rstest::{fixture, rstest};

    #[fixture]
    fn roster() -> Vec<Participant> {
        make_roster(&["Amy", "Beatrix", "Tom", "tamara"])
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn it_should_return_the_input_unchanged_for_a_blank_term(
        roster: Vec<Participant>,
        #[case] term: &str,
    ) {
        assert_eq!(filter_by_name(&roster, term), roster);
    }

    #[rstest]
    fn it_should_match_case_insensitively_and_preserve_order(roster: Vec<Participant>) {
        let filtered = filter_by_name(&roster, "TAM");
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["tamara"]);

        let filtered = filter_by_name(&roster, "m");
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Tom", "tamara"]);
    }

    #[rstest]
    fn it_should_trim_the_term_before_matching(roster: Vec<Participant>) {
        let filtered = filter_by_name(&roster, "  amy ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Amy");
    }

    #[rstest]
    fn it_should_return_an_empty_subsequence_when_nothing_matches(roster: Vec<Participant>) {
        assert!(filter_by_name(&roster, "zelda").is_empty());
    }

    #[rstest]
    fn it_should_select_only_participants_with_no_false_slots() {
        let perfect = ParticipantBuilder::new()
            .id("participant-fixed-0001")
            .name("Amy")
            .attendance(vec![true; 6])
            .build();
        let partial = ParticipantBuilder::new()
            .id("participant-fixed-0002")
            .name("Tom")
            .attendance(vec![true, true, false, true, true, true])
            .build();
        let absent = ParticipantBuilder::new()
            .id("participant-fixed-0003")
            .name("Beatrix")
            .attendance(vec![false; 6])
            .build();

        let report = perfect_attendance(&[perfect.clone(), partial, absent]);
        assert_eq!(report, vec![perfect]);
    }

    #[rstest]
    fn it_should_include_zero_length_vectors_as_vacuously_perfect() {
        let boundary = ParticipantBuilder::new().attendance(Vec::new()).build();
        assert_eq!(perfect_attendance(std::slice::from_ref(&boundary)), vec![boundary]);
    }

    #[rstest]
    fn it_should_preserve_input_order_in_the_report() {
        let roster: Vec<Participant> = make_roster(&["Tom", "Amy"])
            .into_iter()
            .map(|p| Participant {
                attendance: vec![true; 6],
                ..p
            })
            .collect();
        let names: Vec<String> = perfect_attendance(&roster)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Tom", "Amy"]);
    }
}
