use proptest::prelude::*;

use pressnote_core::{
    authorize_mutation, check_comment_text, form_visible, list_visible, resolve_slug, routes,
    slugify, AccessOutcome, Identity, Note, NotePolicy, SiteConfig, UserId,
};

fn note(id: i64, owner_id: UserId) -> Note {
    Note {
        id,
        owner_id,
        title: "Заметка".to_string(),
        text: "Текст".to_string(),
        slug: format!("note-{id}"),
    }
}

fn identity_strategy() -> impl Strategy<Value = Identity> {
    prop_oneof![
        Just(Identity::Anonymous),
        (1i64..1_000).prop_map(Identity::Authenticated),
    ]
}

proptest! {
    #[test]
    fn only_the_owner_is_ever_allowed(identity in identity_strategy(), owner_id in 1i64..1_000) {
        let outcome = authorize_mutation(
            &NotePolicy,
            identity,
            &note(1, owner_id),
            "/notes/note-1/edit/",
            "/auth/login/",
        );
        match identity {
            Identity::Authenticated(user_id) if user_id == owner_id => {
                prop_assert_eq!(outcome, AccessOutcome::Allow);
            }
            Identity::Authenticated(_) => {
                prop_assert_eq!(outcome, AccessOutcome::NotFound);
            }
            Identity::Anonymous => {
                prop_assert!(
                    matches!(outcome, AccessOutcome::RedirectToLogin { .. }),
                    "expected AccessOutcome::RedirectToLogin, got {:?}",
                    outcome
                );
            }
        }
    }

    #[test]
    fn anonymous_redirect_carries_the_requested_path(path in "/[a-z0-9/_-]{0,40}") {
        let config = SiteConfig::default();
        let outcome = authorize_mutation(
            &NotePolicy,
            Identity::Anonymous,
            &note(1, 1),
            &path,
            &config.login_path,
        );
        prop_assert_eq!(
            outcome,
            AccessOutcome::RedirectToLogin {
                location: routes::login_redirect(&config.login_path, &path),
            }
        );
    }

    #[test]
    fn listing_partitions_notes_exactly_by_owner(
        owners in proptest::collection::vec(1i64..5, 0..30),
        caller in 1i64..5,
    ) {
        let items: Vec<Note> = owners
            .iter()
            .enumerate()
            .map(|(index, owner)| note(index as i64 + 1, *owner))
            .collect();
        let expected = owners.iter().filter(|owner| **owner == caller).count();

        let visible = list_visible(&NotePolicy, Identity::Authenticated(caller), items);
        prop_assert_eq!(visible.len(), expected);
        prop_assert!(visible.iter().all(|n| n.owner_id == caller));

        // A second pass removes nothing.
        let count = visible.len();
        let again = list_visible(&NotePolicy, Identity::Authenticated(caller), visible);
        prop_assert_eq!(again.len(), count);
    }

    #[test]
    fn embedded_banned_word_always_fails(prefix in "[а-яa-z ]{0,20}", suffix in "[а-яa-z ]{0,20}") {
        let config = SiteConfig::default();
        let text = format!("{prefix}{}{suffix}", config.bad_words[0]);
        let result = check_comment_text(&text, &config.bad_words, &config.comment_warning);
        prop_assert!(result.is_err());
        prop_assert_eq!(result.unwrap_err().message, config.comment_warning);
    }

    #[test]
    fn slugify_output_is_normalized(title in "\\PC{0,150}") {
        let slug = slugify(&title);
        prop_assert_eq!(slug.clone(), slugify(&title));
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(slug.chars().count() <= 100);
    }

    #[test]
    fn slug_collision_message_is_slug_plus_suffix(slug in "[a-z0-9-]{1,30}") {
        let config = SiteConfig::default();
        let err = resolve_slug(
            "Заголовок",
            Some(&slug),
            |_| Ok::<_, ()>(true),
            &config.slug_warning_suffix,
        )
        .unwrap()
        .unwrap_err();
        prop_assert_eq!(err.field, "slug");
        prop_assert_eq!(err.message, format!("{slug}{}", config.slug_warning_suffix));

        let free = resolve_slug(
            "Заголовок",
            Some(&slug),
            |_| Ok::<_, ()>(false),
            &config.slug_warning_suffix,
        )
        .unwrap()
        .unwrap();
        prop_assert_eq!(free, slug);
    }

    #[test]
    fn comment_form_follows_authentication(identity in identity_strategy()) {
        prop_assert_eq!(form_visible(identity), identity.is_authenticated());
    }
}
