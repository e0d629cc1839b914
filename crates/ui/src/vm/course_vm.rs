use services::CourseCard;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: String,
    pub name: String,
    pub level_token: &'static str,
    pub level_label: &'static str,
    pub description: String,
    pub sample_code: String,
    pub completed: bool,
}

impl From<&CourseCard> for CourseCardVm {
    fn from(card: &CourseCard) -> Self {
        let course = &card.course;
        Self {
            id: course.id().to_owned(),
            name: course.name().to_owned(),
            level_token: course.level().as_str(),
            level_label: course.level().label(),
            description: course.description().to_owned(),
            sample_code: course.sample_code().to_owned(),
            completed: card.completed,
        }
    }
}

#[must_use]
pub fn map_course_cards(cards: &[CourseCard]) -> Vec<CourseCardVm> {
    cards.iter().map(CourseCardVm::from).collect()
}

#[must_use]
pub fn completion_label(completed: usize, total: usize) -> String {
    format!("{completed} of {total} courses completed")
}
