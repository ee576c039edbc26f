//! Constraint tables for every record of the resume tree. The engine stays
//! generic; which rule sits on which field is declared here, one `Validate`
//! impl per record.

use crate::schema::resume::{
    Award, Basics, Certificate, Education, Interest, Interval, Language, Location, Profile,
    Project, Publication, Reference, Resume, Skill, Volunteer, Work,
};
use crate::validation::engine::{Child, FieldSpec, FieldValue, Rule, Validate};

impl Validate for Resume {
    fn children(&self) -> Vec<Child<'_>> {
        vec![
            Child::One("basics", &self.basics),
            many("work", &self.work),
            many("volunteer", &self.volunteer),
            many("education", &self.education),
            many("awards", &self.awards),
            many("certificates", &self.certificates),
            many("publications", &self.publications),
            many("skills", &self.skills),
            many("languages", &self.languages),
            many("interests", &self.interests),
            many("references", &self.references),
            many("projects", &self.projects),
        ]
    }
}

fn many<'a, T: Validate>(name: &'static str, records: &'a [T]) -> Child<'a> {
    Child::Many(name, records.iter().map(|r| r as &dyn Validate).collect())
}

/// The two symmetric declarations enforcing start <= end. Both fire on an
/// inverted interval and the double report is kept as-is; either end may be
/// the first one a reader looks at.
fn interval_specs(interval: &Interval) -> Vec<FieldSpec<'_>> {
    vec![
        FieldSpec {
            name: "startDate",
            value: FieldValue::Date(interval.start_date),
            rules: &[Rule::LtField("endDate")],
        },
        FieldSpec {
            name: "endDate",
            value: FieldValue::Date(interval.end_date),
            rules: &[Rule::GtField("startDate")],
        },
    ]
}

fn text<'a>(name: &'static str, value: &'a str, rules: &'static [Rule]) -> FieldSpec<'a> {
    FieldSpec {
        name,
        value: FieldValue::Text(value),
        rules,
    }
}

impl Validate for Basics {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        vec![
            text("name", &self.name, &[Rule::Required]),
            text("label", &self.label, &[Rule::Required]),
            text("email", &self.email, &[Rule::Required, Rule::Email]),
            text("url", &self.url, &[Rule::Url]),
        ]
    }

    fn children(&self) -> Vec<Child<'_>> {
        vec![
            Child::One("location", &self.location),
            many("profiles", &self.profiles),
        ]
    }
}

// No constraints of its own, but stays on the walk so future rules slot in
// with paths intact.
impl Validate for Location {}

impl Validate for Profile {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        vec![text("url", &self.url, &[Rule::Url])]
    }
}

impl Validate for Work {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        let mut specs = interval_specs(&self.interval);
        specs.push(text("url", &self.url, &[Rule::Url]));
        specs
    }
}

impl Validate for Volunteer {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        let mut specs = interval_specs(&self.interval);
        specs.push(text("url", &self.url, &[Rule::Url]));
        specs
    }
}

impl Validate for Education {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        let mut specs = interval_specs(&self.interval);
        specs.push(text("url", &self.url, &[Rule::Url]));
        specs
    }
}

impl Validate for Award {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        vec![FieldSpec {
            name: "date",
            value: FieldValue::Date(self.date),
            rules: &[Rule::Lte],
        }]
    }
}

impl Validate for Certificate {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec {
                name: "date",
                value: FieldValue::Date(self.date),
                rules: &[Rule::Lte],
            },
            text("url", &self.url, &[Rule::Url]),
        ]
    }
}

impl Validate for Publication {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec {
                name: "releaseDate",
                value: FieldValue::Date(self.release_date),
                rules: &[Rule::Lte],
            },
            text("url", &self.url, &[Rule::Url]),
        ]
    }
}

impl Validate for Skill {}
impl Validate for Language {}
impl Validate for Interest {}
impl Validate for Reference {}

impl Validate for Project {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec {
                name: "startDate",
                value: FieldValue::Date(self.start_date),
                rules: &[Rule::Lte],
            },
            FieldSpec {
                name: "endDate",
                value: FieldValue::Date(self.end_date),
                rules: &[Rule::Lte],
            },
            text("url", &self.url, &[Rule::Url]),
        ]
    }
}
