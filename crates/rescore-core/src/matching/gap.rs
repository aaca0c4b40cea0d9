use std::collections::BTreeSet;

use serde::Serialize;

/// Set difference between a target skill list and an observed skill list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillGap {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Compare two free-form skill lists without weighting or curves.
///
/// Both inputs are normalized to trimmed lowercase and deduplicated; empty
/// entries are discarded. Output is lexicographically sorted, so the result
/// is deterministic regardless of input order. This is the baseline path
/// used when no structured job profile exists.
pub fn find_skill_gap<R, J>(resume_skills: R, jd_skills: J) -> SkillGap
where
    R: IntoIterator,
    R::Item: AsRef<str>,
    J: IntoIterator,
    J::Item: AsRef<str>,
{
    let resume_set = normalized_set(resume_skills);
    let jd_set = normalized_set(jd_skills);

    SkillGap {
        matched_skills: jd_set.intersection(&resume_set).cloned().collect(),
        missing_skills: jd_set.difference(&resume_set).cloned().collect(),
    }
}

fn normalized_set<I>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    skills
        .into_iter()
        .map(|skill| skill.as_ref().trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_target_skills_into_matched_and_missing() {
        let gap = find_skill_gap(["Python", "SQL"], ["sql", "java"]);

        assert_eq!(gap.matched_skills, vec!["sql"]);
        assert_eq!(gap.missing_skills, vec!["java"]);
    }

    #[test]
    fn identical_sets_have_no_gap() {
        let skills = ["rust", "go", "sql"];
        let gap = find_skill_gap(skills, skills);

        assert_eq!(gap.matched_skills, vec!["go", "rust", "sql"]);
        assert!(gap.missing_skills.is_empty());
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let gap = find_skill_gap(["  Docker  ", "KUBERNETES"], ["docker", "kubernetes ", "helm"]);

        assert_eq!(gap.matched_skills, vec!["docker", "kubernetes"]);
        assert_eq!(gap.missing_skills, vec!["helm"]);
    }

    #[test]
    fn discards_empty_entries() {
        let gap = find_skill_gap(["", "   ", "sql"], ["sql", ""]);

        assert_eq!(gap.matched_skills, vec!["sql"]);
        assert!(gap.missing_skills.is_empty());
    }

    #[test]
    fn output_is_sorted() {
        let gap = find_skill_gap(Vec::<&str>::new(), ["zig", "ada", "nim"]);

        assert_eq!(gap.missing_skills, vec!["ada", "nim", "zig"]);
    }
}
