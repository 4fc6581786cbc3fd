use crate::models::response::Completion;
use crate::models::{FinishReason, ObjectType};

pub fn assert_completion_response(
    response: &Completion,
    expected_model: &str,
    expected_text: &str,
) {
    assert!(response.id.starts_with("cmpl-"));
    assert_eq!(response.object, ObjectType::TextCompletion);
    assert_eq!(&response.model, expected_model);
    assert_eq!(response.choices.len(), 1);

    let choice = &response.choices[0];
    assert_eq!(choice.index, 0);
    assert_eq!(choice.text, expected_text);
    assert_eq!(choice.finish_reason, FinishReason::Stop);
    assert!(choice.logprobs.is_none());
    assert!(response.metadata.inference_time_seconds >= 0.0);
}
