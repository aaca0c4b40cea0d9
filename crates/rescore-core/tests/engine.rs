use rescore_core::{
    find_skill_gap, score_against_profile, Analyzer, ProfileStore,
};

const RESUME: &str = "\
Senior backend engineer with 7+ years of experience building distributed \
systems. Developed and deployed REST API microservices in Python, Go and \
Rust, backed by PostgreSQL, Redis and Kafka. Implemented CI/CD pipelines \
with Docker, Kubernetes and Terraform on AWS. Designed database schemas, \
optimized query latency, and led code review for a team of five. BTech in \
computer science. Strong communication, collaboration and problem solving.";

#[test]
fn builtin_roles_all_produce_bounded_scores() {
    let store = ProfileStore::builtin().unwrap();

    for role in store.role_names() {
        let profile = store.get(role).unwrap();
        let result = score_against_profile(RESUME, profile, 0.0);

        assert!(
            (0.0..=100.0).contains(&result.overall_score),
            "{role} scored {}",
            result.overall_score
        );
        // A substantive document never scores below the floor.
        assert!(result.overall_score >= 15.0, "{role} scored {}", result.overall_score);
    }
}

#[test]
fn scoring_is_deterministic() {
    let store = ProfileStore::builtin().unwrap();
    let profile = store.get("Backend Developer").unwrap();

    let first = score_against_profile(RESUME, profile, 42.0);
    let second = score_against_profile(RESUME, profile, 42.0);

    assert_eq!(first, second);
}

#[test]
fn backend_resume_fits_backend_role_best_among_frontend_roles() {
    let store = ProfileStore::builtin().unwrap();

    let backend = score_against_profile(RESUME, store.get("Backend Developer").unwrap(), 0.0);
    let frontend = score_against_profile(RESUME, store.get("Frontend Developer").unwrap(), 0.0);

    assert!(
        backend.overall_score > frontend.overall_score,
        "backend {} vs frontend {}",
        backend.overall_score,
        frontend.overall_score
    );
}

#[test]
fn experience_statement_is_extracted_through_the_full_path() {
    let store = ProfileStore::builtin().unwrap();
    let result = score_against_profile(RESUME, store.get("Backend Developer").unwrap(), 0.0);

    assert_eq!(result.experience_metrics.years, 7.0);
    assert!(result.experience_metrics.keyword_count > 0);
    assert!(result.matched_skills.technical.contains(&"python".to_string()));
    assert!(result.missing_skills.technical.len() <= 10);
}

#[test]
fn similarity_bonus_never_exceeds_fifteen_points() {
    let store = ProfileStore::builtin().unwrap();
    let profile = store.get("Software Engineer").unwrap();

    let without = score_against_profile(RESUME, profile, 0.0);
    let with = score_against_profile(RESUME, profile, 100.0);

    assert!(with.overall_score - without.overall_score <= 15.0 + 1e-9);
}

#[test]
fn analyzer_report_round_trips_to_json() {
    let analyzer = Analyzer::new(ProfileStore::builtin().unwrap());
    let report = analyzer.analyze_role(RESUME, "Backend Developer", Some(62.5)).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["similarity"], 62.5);
    assert!(json["score"].as_f64().unwrap() > 15.0);
    assert!(json["feedback"].as_str().unwrap().contains("Backend Developer"));
    assert!(json["matched_skills"].as_array().unwrap().len() <= 10);
}

#[test]
fn skill_gap_path_is_independent_of_profiles() {
    let gap = find_skill_gap(["Python", "SQL"], ["sql", "java"]);

    assert_eq!(gap.matched_skills, vec!["sql"]);
    assert_eq!(gap.missing_skills, vec!["java"]);
}
