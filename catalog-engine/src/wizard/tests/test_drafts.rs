use super::*;

#[test]
fn step_advancement_saves_a_draft() {
    let (_, drafts, mut session, category) = create_test_session();
    let outcome = session.submit_description(description(&category.id)).unwrap();

    assert!(matches!(outcome.notices[0], Notice::DraftSaved { .. }));
    assert_eq!(drafts.draft_count().unwrap(), 1);

    let stored = drafts.latest_draft().unwrap().unwrap();
    assert_eq!(stored.step, WizardStep::Variants.number());
    assert_eq!(stored.data.name.as_deref(), Some("Nike Air Jordan Shoes"));
}

#[test]
fn advancement_reuses_one_draft_id() {
    let (_, drafts, mut session, category) = create_test_session();
    session.submit_description(description(&category.id)).unwrap();
    let first_id = session.draft_id().unwrap().to_string();
    session.submit_variants(size_and_color()).unwrap();

    assert_eq!(session.draft_id().unwrap(), first_id);
    assert_eq!(drafts.draft_count().unwrap(), 1);
}

#[test]
fn saved_draft_resumes_in_a_new_session() {
    let (catalog, drafts, mut session, category) = create_test_session();
    session.submit_description(description(&category.id)).unwrap();
    session.submit_variants(size_and_color()).unwrap();
    let saved = session.save_draft().unwrap();

    let mut resumed = WizardSession::new(catalog, drafts);
    assert!(resumed.resume_latest());
    assert_eq!(resumed.step(), WizardStep::Combinations);
    assert_eq!(resumed.draft_id(), Some(saved.id.as_str()));
    assert_eq!(resumed.data(), &saved.data);
    // the generated combinations came back too
    assert_eq!(resumed.data().combinations.as_ref().unwrap().len(), 4);
}

#[test]
fn resume_picks_the_most_recently_updated_draft() {
    let (catalog, drafts, _, category) = create_test_session();

    let mut first = WizardSession::new(catalog.clone(), drafts.clone());
    first.submit_description(description(&category.id)).unwrap();

    std::thread::sleep(std::time::Duration::from_millis(5));

    let mut second = WizardSession::new(catalog.clone(), drafts.clone());
    let mut form = description(&category.id);
    form.name = "Nike Kork Low Shoes".into();
    second.submit_description(form).unwrap();

    let mut resumed = WizardSession::new(catalog, drafts);
    assert!(resumed.resume_latest());
    assert_eq!(resumed.data().name.as_deref(), Some("Nike Kork Low Shoes"));
}

#[test]
fn resume_with_empty_store_starts_fresh() {
    let (_, _, mut session, _) = create_test_session();
    assert!(!session.resume_latest());
    assert_eq!(session.step(), WizardStep::Description);
}

#[test]
fn unavailable_store_degrades_to_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the database path makes every open fail.
    let path = dir.path().join("occupied");
    std::fs::create_dir(&path).unwrap();

    let catalog = CatalogService::new();
    let category = catalog
        .add_category(CategoryCreate {
            name: "Shoes".into(),
        })
        .unwrap();
    let mut session = WizardSession::new(catalog, DraftStore::new(&path));

    // advancement still works, the failure is surfaced as a notice
    let outcome = session.submit_description(description(&category.id)).unwrap();
    assert_eq!(outcome.step, WizardStep::Variants);
    assert!(matches!(
        outcome.notices[0],
        Notice::DraftSaveFailed { .. }
    ));
    assert_eq!(session.data().name.as_deref(), Some("Nike Air Jordan Shoes"));

    // the explicit save propagates the error instead
    assert!(matches!(
        session.save_draft(),
        Err(WizardError::Persistence(_))
    ));
}

#[test]
fn completion_deletes_the_draft() {
    let (_, drafts, mut session, category) = create_test_session();
    session.submit_description(description(&category.id)).unwrap();
    session.submit_variants(size_and_color()).unwrap();
    let generated = session.data().combinations.clone().unwrap();
    session.submit_combinations(filled(&generated)).unwrap();
    assert_eq!(drafts.draft_count().unwrap(), 1);

    let (_, notices) = session.submit_pricing(pricing()).unwrap();
    assert!(notices.is_empty());
    assert_eq!(drafts.draft_count().unwrap(), 0);
}

#[test]
fn explicit_save_keeps_the_current_step() {
    let (_, drafts, mut session, category) = create_test_session();
    session.submit_description(description(&category.id)).unwrap();
    // operator stays on Variants and saves before walking away
    let saved = session.save_draft().unwrap();
    assert_eq!(saved.step, WizardStep::Variants.number());
    assert_eq!(drafts.draft_count().unwrap(), 1);
}
