use crate::error::{CatalogError, CatalogResult};

/// Reference properties of one named concrete grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSpec {
    pub name: &'static str,
    /// Characteristic compressive strength f_ck [N/mm²]
    pub fck_mpa: f64,
    /// Assumed standard deviation for good site control [N/mm²]
    pub std_dev_mpa: f64,
    /// Flat margin over f_ck used as a floor on target strength [N/mm²]
    pub margin_mpa: f64,
}

impl GradeSpec {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        query.is_empty() || self.name.to_ascii_lowercase().contains(&query)
    }
}

const fn grade(name: &'static str, fck_mpa: f64, std_dev_mpa: f64, margin_mpa: f64) -> GradeSpec {
    GradeSpec {
        name,
        fck_mpa,
        std_dev_mpa,
        margin_mpa,
    }
}

const GRADE_CATALOG: [GradeSpec; 15] = [
    grade("M10", 10.0, 3.5, 5.0),
    grade("M15", 15.0, 3.5, 5.0),
    grade("M20", 20.0, 4.0, 5.5),
    grade("M25", 25.0, 4.0, 5.5),
    grade("M30", 30.0, 5.0, 6.5),
    grade("M35", 35.0, 5.0, 6.5),
    grade("M40", 40.0, 5.0, 6.5),
    grade("M45", 45.0, 5.0, 6.5),
    grade("M50", 50.0, 5.0, 6.5),
    grade("M55", 55.0, 5.0, 6.5),
    grade("M60", 60.0, 5.0, 6.5),
    grade("M65", 65.0, 6.0, 8.0),
    grade("M70", 70.0, 6.0, 8.0),
    grade("M75", 75.0, 6.0, 8.0),
    grade("M80", 80.0, 6.0, 8.0),
];

pub fn grade_catalog() -> &'static [GradeSpec] {
    &GRADE_CATALOG
}

/// Look up a grade by name. Surrounding whitespace and letter case are ignored.
pub fn lookup_grade(name: &str) -> CatalogResult<&'static GradeSpec> {
    let wanted = name.trim();
    grade_catalog()
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CatalogError::UnknownGrade {
            name: name.to_string(),
        })
}

pub fn filter_grades(query: &str) -> Vec<GradeSpec> {
    grade_catalog()
        .iter()
        .copied()
        .filter(|g| g.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_fifteen_unique_grades() {
        let names: HashSet<_> = grade_catalog().iter().map(|g| g.name).collect();
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn std_dev_and_margin_step_at_breakpoints() {
        let m15 = lookup_grade("M15").unwrap();
        let m20 = lookup_grade("M20").unwrap();
        let m60 = lookup_grade("M60").unwrap();
        let m65 = lookup_grade("M65").unwrap();
        assert_eq!((m15.std_dev_mpa, m15.margin_mpa), (3.5, 5.0));
        assert_eq!((m20.std_dev_mpa, m20.margin_mpa), (4.0, 5.5));
        assert_eq!((m60.std_dev_mpa, m60.margin_mpa), (5.0, 6.5));
        assert_eq!((m65.std_dev_mpa, m65.margin_mpa), (6.0, 8.0));
    }

    #[test]
    fn catalog_is_sorted_by_strength() {
        for pair in grade_catalog().windows(2) {
            assert!(pair[0].fck_mpa < pair[1].fck_mpa);
            assert!(pair[0].std_dev_mpa <= pair[1].std_dev_mpa);
            assert!(pair[0].margin_mpa <= pair[1].margin_mpa);
        }
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(lookup_grade(" m25 ").unwrap().fck_mpa, 25.0);
    }

    #[test]
    fn unknown_grade_fails() {
        let err = lookup_grade("M27").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownGrade {
                name: "M27".to_string()
            }
        );
        assert!(lookup_grade("").is_err());
    }

    #[test]
    fn filter_matches_substring() {
        let hits = filter_grades("m7");
        let names: Vec<_> = hits.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["M70", "M75"]);
        assert_eq!(filter_grades("").len(), 15);
    }
}
