/// Wire value of the only status this code path writes.
pub const CONTRIBUTION_STATUS_COMPLETED: &str = "COMPLETED";

/// Column projection for listings by member: all columns plus the project.
pub const MEMBER_CONTRIBUTIONS_SELECT: &str = "*,project:projects(*)";

/// Column projection for listings by project: all columns plus the member profile.
pub const PROJECT_CONTRIBUTIONS_SELECT: &str = "*,member_profile:profiles(*)";
