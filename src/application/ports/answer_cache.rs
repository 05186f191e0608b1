/// Durable question → answer store consulted before the remote model.
///
/// Implementations never fail to the caller: a store that cannot persist keeps
/// serving from memory and reports the problem through logging.
pub trait AnswerCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn put(&self, key: String, value: String);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
