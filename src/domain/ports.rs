/// Bounds oracle the robot asks before committing a position.
pub trait Surface {
    fn is_out_of_table(&self, x: i64, y: i64) -> bool;
}
