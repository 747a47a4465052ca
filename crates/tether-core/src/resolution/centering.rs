use super::result::ResolvedAttachment;

/// Decide whether a step renders centered instead of anchored.
///
/// Accepts every shape a resolved set can take: nothing at all, an empty set,
/// or one or more records. Only the first record is inspected, so a
/// multi-target step whose first target is missing is centered even if later
/// targets resolved.
pub fn should_center_step<E>(resolved: Option<&[ResolvedAttachment<E>]>) -> bool {
    resolved
        .and_then(<[_]>::first)
        .is_none_or(ResolvedAttachment::should_center)
}
