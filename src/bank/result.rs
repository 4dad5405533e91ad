/// Result for process-level failures. Business rejections use `account::TransactionResult`.
pub type Result<T = ()> = anyhow::Result<T>;
