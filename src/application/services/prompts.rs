pub fn summarize_prompt(text: &str) -> String {
    format!("Summarize the following document or text: {text}")
}

pub fn question_prompt(context: &str, question: &str) -> String {
    format!("Context: {context}\nQuestion: {question}\nAnswer:")
}

pub fn entities_prompt(text: &str) -> String {
    format!(
        "Extract the key names and figures from the following document or text. \
         Respond with a single JSON object and nothing else, using exactly these keys, \
         each holding a list of strings: \"people\", \"organizations\", \"locations\", \
         \"dates\", \"figures\". Use an empty list when nothing fits a key.\n\n{text}"
    )
}
