//! Quiz content and the profile classification rule.
//!
//! The questions and profiles are fixed at build time. Classification looks
//! at two of the five answers: the "biggest challenge" question (index 1)
//! and the "biggest difference" question (index 4). Rules are checked in
//! order and the first match wins.

pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

pub struct Profile {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub recommendations: [&'static str; 3],
    pub cta: &'static str,
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        prompt: "Which best describes your role?",
        options: [
            "Communications leader",
            "Executive or team lead",
            "Content practitioner",
            "Consultant or solo operator",
        ],
    },
    Question {
        prompt: "What's your biggest challenge right now?",
        options: [
            "Keeping up with new AI tools",
            "Telling one consistent story across channels",
            "Getting leadership buy-in for change",
            "No repeatable process for producing content",
        ],
    },
    Question {
        prompt: "How is your team using AI today?",
        options: [
            "Not at all yet",
            "A few individual experiments",
            "Regular use on some workflows",
            "It's built into how we work",
        ],
    },
    Question {
        prompt: "How much content does your team ship in a typical week?",
        options: [
            "A piece here and there",
            "A steady trickle",
            "More than we can keep consistent",
            "A full editorial calendar",
        ],
    },
    Question {
        prompt: "What would make the biggest difference for you?",
        options: [
            "A clear narrative strategy",
            "Knowing which AI tools are worth trusting",
            "A step-by-step framework to follow",
            "A community of peers figuring it out too",
        ],
    },
];

pub const PROFILES: [Profile; 4] = [
    Profile {
        title: "Strategic Narrator",
        emoji: "🎙",
        description: "You think in storylines, not announcements. Your edge is \
            turning scattered updates into one narrative your whole \
            organization can repeat — and AI is about to make that skill \
            rarer and more valuable.",
        recommendations: [
            "Start with the episodes on narrative architecture and the Micro-Arc Framework",
            "Map your next quarter's comms to a single storyline before picking tools",
            "Use AI for drafts and research, never for deciding what the story is",
        ],
        cta: "Join the founding members list for the narrative strategy deep-dives first.",
    },
    Profile {
        title: "AI Pioneer",
        emoji: "🚀",
        description: "You're ahead of your peers on tooling and you know it. \
            The risk isn't falling behind on AI — it's adopting faster than \
            your team's processes and standards can absorb.",
        recommendations: [
            "Listen for the tool-selection episodes and real team case studies",
            "Pick two workflows to automate end-to-end instead of ten half-way",
            "Write down your quality bar before you scale AI-assisted output",
        ],
        cta: "Join the founding members list to get the AI implementation episodes early.",
    },
    Profile {
        title: "Framework Builder",
        emoji: "🛠",
        description: "You don't need more inspiration, you need a repeatable \
            system. You're the person who turns one good episode into a \
            process the whole team can run without you.",
        recommendations: [
            "Start with the Voice Note Blueprint and production workflow episodes",
            "Document your current content process before changing any of it",
            "Adopt one framework fully rather than sampling several",
        ],
        cta: "Join the founding members list and get the frameworks as worksheets.",
    },
    Profile {
        title: "Movement Maker",
        emoji: "🌊",
        description: "You're building something bigger than a content \
            calendar — you want your ideas to travel. What you need most is \
            a bench of peers and examples from teams a step ahead of yours.",
        recommendations: [
            "Listen to the guest interviews with communications leaders first",
            "Share one episode with your team each week and discuss it",
            "Bring your hardest question to the founding member Q&As",
        ],
        cta: "Join the founding members list and help shape where the show goes.",
    },
];

/// Classifies the respondent from the collected answer indices.
/// Checked in order; the last profile is the fallback.
pub fn classify(answers: &[usize]) -> &'static Profile {
    let challenge = answers.get(1).copied();
    let difference = answers.get(4).copied();

    if challenge == Some(1) || difference == Some(0) {
        &PROFILES[0]
    } else if challenge == Some(0) || difference == Some(1) {
        &PROFILES[1]
    } else if challenge == Some(3) || difference == Some(2) {
        &PROFILES[2]
    } else {
        &PROFILES[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_answer_combination_maps_to_a_defined_profile() {
        let titles: Vec<&str> = PROFILES.iter().map(|p| p.title).collect();
        for challenge in 0..4 {
            for difference in 0..4 {
                let profile = classify(&[0, challenge, 0, 0, difference]);
                assert!(titles.contains(&profile.title));
            }
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        // challenge==1 fires rule one even though difference==1 would
        // also satisfy rule two
        let profile = classify(&[0, 1, 0, 0, 1]);
        assert_eq!(profile.title, "Strategic Narrator");
    }

    #[test]
    fn challenge_zero_classifies_as_ai_pioneer() {
        let profile = classify(&[1, 0, 2, 1, 3]);
        assert_eq!(profile.title, "AI Pioneer");
    }

    #[test]
    fn unmatched_answers_fall_back_to_movement_maker() {
        let profile = classify(&[0, 2, 0, 0, 3]);
        assert_eq!(profile.title, "Movement Maker");
    }

    #[test]
    fn missing_answers_fall_back_to_movement_maker() {
        assert_eq!(classify(&[]).title, "Movement Maker");
    }

    #[test]
    fn profiles_carry_complete_copy() {
        for profile in &PROFILES {
            assert!(!profile.title.is_empty());
            assert!(!profile.description.is_empty());
            assert!(!profile.cta.is_empty());
            assert!(profile.recommendations.iter().all(|r| !r.is_empty()));
        }
    }

    #[test]
    fn quiz_has_five_questions_with_four_options() {
        assert_eq!(QUESTIONS.len(), 5);
        for question in &QUESTIONS {
            assert!(!question.prompt.is_empty());
            assert!(question.options.iter().all(|o| !o.is_empty()));
        }
    }
}
