use tracing::debug;

use crate::error::AppError;
use crate::model::rank::{RankTable, RolePlan};
use crate::service::sink::RoleSink;

/// Converges a member's guild roles onto their rank table target.
///
/// The reconciler is a pure bridge between the rank table's planning logic
/// and a `RoleSink`: it reads the member's held roles, computes the plan, and
/// applies it. A member whose roles already match their target produces no
/// sink mutations at all, so repeated passes are harmless.
pub struct RoleReconciler<'a, S: RoleSink + ?Sized> {
    sink: &'a S,
    table: &'a RankTable,
}

impl<'a, S: RoleSink + ?Sized> RoleReconciler<'a, S> {
    pub fn new(sink: &'a S, table: &'a RankTable) -> Self {
        Self { sink, table }
    }

    /// Applies the role plan for a member at the given XP total.
    ///
    /// Stale table roles are revoked before the target is granted, so a
    /// member never finishes a pass holding two tiers. Roles that are not
    /// part of the table are never touched.
    ///
    /// # Returns
    /// - `Ok(RolePlan)` - The mutations that were applied (possibly none)
    /// - `Err(AppError)` - A sink read or mutation failed
    pub async fn reconcile(&self, member_id: u64, xp: i32) -> Result<RolePlan, AppError> {
        let held = self.sink.current_roles(member_id).await?;
        let plan = self.table.plan(&held, xp);

        if plan.is_converged() {
            return Ok(plan);
        }

        for role in &plan.revoke {
            self.sink.revoke_role(member_id, role).await?;
        }
        if let Some(role) = &plan.grant {
            self.sink.grant_role(member_id, role).await?;
        }

        debug!(
            "Reconciled roles for member {}: granted {:?}, revoked {:?}",
            member_id, plan.grant, plan.revoke
        );

        Ok(plan)
    }
}
