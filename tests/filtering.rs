use message_organizer::messages::{
    sample_messages, visible_messages, Category, CategoryFilter, Message, Priority,
};

fn senders<'a>(messages: &[&'a Message]) -> Vec<&'a str> {
    messages.iter().map(|m| m.sender.as_str()).collect()
}

fn owned(messages: &[&Message]) -> Vec<Message> {
    messages.iter().map(|m| (*m).clone()).collect()
}

/// The samples plus a few extra records so every category and priority shows up.
fn extended_seed() -> Vec<Message> {
    let mut seed = sample_messages();
    seed.push(Message {
        id: 4,
        sender: "Team Lead".to_string(),
        content: "Standup moved to 10am tomorrow.".to_string(),
        category: Category::General,
        priority: Priority::Medium,
        has_attachments: false,
        timestamp: "2024-03-13T08:00:00".to_string(),
    });
    seed.push(Message {
        id: 5,
        sender: "Account Executive".to_string(),
        content: "Our TECH stack discount ends Friday.".to_string(),
        category: Category::Sales,
        priority: Priority::Medium,
        has_attachments: true,
        timestamp: "2024-03-12T15:20:00".to_string(),
    });
    seed.push(Message {
        id: 6,
        sender: "Digest".to_string(),
        content: "Your weekly summary".to_string(),
        category: Category::Other("newsletter".to_string()),
        priority: Priority::Low,
        has_attachments: false,
        timestamp: "2024-03-11T06:00:00".to_string(),
    });
    seed
}

const QUERIES: [&str; 7] = ["", "tech", "TECH", "lead", "attached", "zzz", "e"];

#[test]
fn all_with_empty_query_is_identity() {
    for seed in [sample_messages(), extended_seed()] {
        let visible = visible_messages(&seed, &CategoryFilter::All, "");
        assert_eq!(owned(&visible), seed);
    }
}

#[test]
fn single_category_keeps_exactly_that_category() {
    let seed = extended_seed();
    let cases = [
        (CategoryFilter::Sales, Category::Sales),
        (CategoryFilter::General, Category::General),
        (CategoryFilter::Recruitment, Category::Recruitment),
    ];

    for (filter, category) in cases {
        let visible = visible_messages(&seed, &filter, "");
        assert!(visible.iter().all(|m| m.category == category));
        let expected = seed.iter().filter(|m| m.category == category).count();
        assert_eq!(visible.len(), expected, "count for {:?}", filter);
    }
}

#[test]
fn derivation_is_idempotent() {
    let seed = extended_seed();
    for filter in CategoryFilter::ALL_OPTIONS {
        for query in QUERIES {
            let once = owned(&visible_messages(&seed, &filter, query));
            let twice = owned(&visible_messages(&once, &filter, query));
            assert_eq!(once, twice, "filter {:?} query {:?}", filter, query);
        }
    }
}

#[test]
fn search_is_case_insensitive() {
    let seed = sample_messages();
    let upper = visible_messages(&seed, &CategoryFilter::All, "RECRUITER");
    let lower = visible_messages(&seed, &CategoryFilter::All, "recruiter");
    assert_eq!(upper, lower);
    assert_eq!(senders(&upper), vec!["John Recruiter"]);
}

#[test]
fn empty_query_returns_category_result() {
    let seed = extended_seed();
    for filter in CategoryFilter::ALL_OPTIONS {
        let by_category: Vec<&Message> =
            seed.iter().filter(|m| filter.matches(&m.category)).collect();
        assert_eq!(visible_messages(&seed, &filter, ""), by_category);
    }
}

#[test]
fn result_preserves_seed_order() {
    let seed = extended_seed();
    for filter in CategoryFilter::ALL_OPTIONS {
        for query in QUERIES {
            let ids: Vec<u32> = visible_messages(&seed, &filter, query)
                .iter()
                .map(|m| m.id)
                .collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted);
        }
    }
}

#[test]
fn passes_commute() {
    let seed = extended_seed();
    for filter in CategoryFilter::ALL_OPTIONS {
        for query in QUERIES {
            let searched = owned(&visible_messages(&seed, &CategoryFilter::All, query));
            let search_first = owned(&visible_messages(&searched, &filter, ""));
            let category_first = owned(&visible_messages(&seed, &filter, query));
            assert_eq!(search_first, category_first);
        }
    }
}

#[test]
fn recruitment_scenario() {
    let seed = sample_messages();
    let visible = visible_messages(&seed, &CategoryFilter::Recruitment, "");
    assert_eq!(senders(&visible), vec!["John Recruiter", "Tech Lead"]);
}

#[test]
fn github_matches_content() {
    let seed = sample_messages();
    let visible = visible_messages(&seed, &CategoryFilter::All, "github");
    assert_eq!(senders(&visible), vec!["Tech Lead"]);
}

#[test]
fn sales_and_tech_is_empty() {
    let seed = sample_messages();
    assert!(visible_messages(&seed, &CategoryFilter::Sales, "tech").is_empty());
}

#[test]
fn unknown_category_never_matches_a_concrete_filter() {
    let seed = extended_seed();
    for filter in [
        CategoryFilter::Sales,
        CategoryFilter::General,
        CategoryFilter::Recruitment,
    ] {
        assert!(visible_messages(&seed, &filter, "")
            .iter()
            .all(|m| m.id != 6));
    }
    assert_eq!(
        senders(&visible_messages(&seed, &CategoryFilter::All, "weekly")),
        vec!["Digest"]
    );
}
