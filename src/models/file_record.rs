/// One row of the contents search: a file and the package that ships it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub package: String,
    pub branch: String,
    pub repository: String,
    pub architecture: String,
}

impl FileRecord {
    pub fn new(
        path: impl Into<String>,
        package: impl Into<String>,
        branch: impl Into<String>,
        repository: impl Into<String>,
        architecture: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
            branch: branch.into(),
            repository: repository.into(),
            architecture: architecture.into(),
        }
    }
}
