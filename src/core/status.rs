/// Exit status reported after a successful run.
pub const SUCCESS_STATUS: i32 = 0;

pub fn baz() -> i32 {
    SUCCESS_STATUS
}
