//! Tests for progress tracking across batch generation

#[cfg(test)]
mod tests {
    use panelmatrix::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use panelmatrix::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a single-file lifecycle
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_single_file() {
        let mut pm = ProgressManager::new();

        pm.initialize(1);
        assert_eq!(pm.file_count(), 1);
        pm.start_file(0, Path::new("order.json"), 1000);
        pm.update_attempt(0, 1);
        pm.update_attempt(0, 2);
        pm.complete_file(0, "success");
        pm.finish();
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();

        pm.initialize(0);
        assert_eq!(pm.file_count(), 0);
        pm.finish();
    }

    // Tests batch mode with more files than bars
    // Verified by creating one bar per file
    #[test]
    fn test_progress_manager_batch_mode() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;

        pm.initialize(file_count);
        for index in 0..file_count {
            let name = format!("order_{index}.json");
            pm.start_file(index, Path::new(&name), 10);
            pm.update_attempt(index, 10);
            pm.complete_file(index, "generation_failed");
        }
        pm.finish();
    }

    // Tests updates for unknown files are ignored
    // Verified by indexing file states directly
    #[test]
    fn test_progress_manager_unknown_index() {
        let mut pm = ProgressManager::new();

        pm.initialize(2);
        pm.update_attempt(7, 3);
        pm.complete_file(7, "success");
        pm.start_file(5, Path::new("late.json"), 10);
        pm.finish();
    }
}
