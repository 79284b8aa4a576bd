use crate::ai::AgentQuery;
use crate::forms::{FormData, FormErrors};

pub fn validate_agent_query(form: &FormData) -> Result<AgentQuery, FormErrors> {
    let mut errors = FormErrors::new();
    let location = errors.min_chars(form, "location", 2, "Location is required.");
    let property_type = errors.min_chars(form, "property_type", 3, "Property type is required.");
    let budget = errors.min_chars(form, "budget", 4, "Budget is required.");
    let unique = form.trimmed("unique_requirements");

    errors.finish(AgentQuery {
        location,
        property_type,
        budget,
        unique_requirements: (!unique.is_empty()).then_some(unique),
    })
}
