//! Pregnancy tracker service. Runs the calculators with the injected clock
//! and persists the last-entered input as a snapshot.
//!
//! The domain functions stay pure; this layer is where "now" gets supplied
//! and where results are logged.

use crate::domain::{
    fertility, gestation, CalculationKind, DomainError, FertileWindow, PregnancyResult,
    TrackerSnapshot,
};
use crate::ports::{ClockPort, StorePort};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Store key for the tracker snapshot record.
const SNAPSHOT_KEY: &str = "pregnancy_tracking_data";

/// Tracker service. Coordinates date calculators and snapshot persistence.
pub struct TrackerService {
    store: Arc<dyn StorePort>,
    clock: Arc<dyn ClockPort>,
}

impl TrackerService {
    pub fn new(store: Arc<dyn StorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Compute metrics from a last-menstrual-period date.
    pub fn track_from_lmp(&self, lmp: NaiveDate) -> Result<PregnancyResult, DomainError> {
        let result = gestation::compute_from_lmp(lmp, self.clock.today())?;
        info!(
            weeks = result.gestational_weeks,
            day = result.gestational_day_of_week,
            edd = %result.edd,
            "tracked from lmp"
        );
        Ok(result)
    }

    /// Compute metrics from an estimated due date.
    pub fn track_from_edd(&self, edd: NaiveDate) -> Result<PregnancyResult, DomainError> {
        let result = gestation::compute_from_edd(edd, self.clock.today())?;
        info!(
            weeks = result.gestational_weeks,
            day = result.gestational_day_of_week,
            lmp = %result.lmp,
            "tracked from edd"
        );
        Ok(result)
    }

    /// Estimate ovulation day and fertile/safe windows.
    pub fn fertile_window(
        &self,
        lmp: NaiveDate,
        cycle_length_days: u32,
    ) -> Result<FertileWindow, DomainError> {
        let window = fertility::fertile_window(lmp, cycle_length_days, self.clock.today())?;
        info!(
            ovulation = %window.ovulation_day,
            cycle = cycle_length_days,
            "computed fertile window"
        );
        Ok(window)
    }

    /// Persist the input the user just calculated from, so the next session
    /// can prefill the prompt.
    pub async fn save_snapshot(
        &self,
        kind: CalculationKind,
        date: NaiveDate,
    ) -> Result<(), DomainError> {
        let snapshot = TrackerSnapshot {
            calculation_type: kind,
            lmp_date: matches!(kind, CalculationKind::Lmp).then_some(date),
            edd_date: matches!(kind, CalculationKind::Edd).then_some(date),
            calculated_at: self.clock.now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        };
        let json =
            serde_json::to_string(&snapshot).map_err(|e| DomainError::Store(e.to_string()))?;
        self.store.set(SNAPSHOT_KEY, &json).await?;
        info!(kind = ?kind, date = %date, "saved tracker snapshot");
        Ok(())
    }

    /// Load the persisted snapshot, if any. A corrupt record reads as None
    /// rather than failing the whole flow.
    pub async fn load_snapshot(&self) -> Result<Option<TrackerSnapshot>, DomainError> {
        let raw = self.store.get(SNAPSHOT_KEY).await?;
        Ok(raw.and_then(|s| serde_json::from_str(&s).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::persistence::MemoryStore;
    use chrono::NaiveDateTime;

    fn service(now: &str) -> TrackerService {
        let clock = FixedClock(
            NaiveDateTime::parse_from_str(now, "%Y-%m-%d %H:%M:%S").unwrap(),
        );
        TrackerService::new(Arc::new(MemoryStore::new()), Arc::new(clock))
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_track_from_lmp_uses_injected_clock() {
        let svc = service("2024-04-01 10:30:00");
        let result = svc.track_from_lmp(d("2024-01-01")).unwrap();
        assert_eq!(result.gestational_weeks, 13);
        assert_eq!(result.edd, d("2024-10-07"));
    }

    #[test]
    fn test_fertile_window_through_service() {
        let svc = service("2024-01-20 08:00:00");
        let window = svc.fertile_window(d("2024-01-01"), 28).unwrap();
        assert_eq!(window.ovulation_day, d("2024-01-15"));
        assert!(matches!(
            svc.fertile_window(d("2024-01-01"), 20),
            Err(DomainError::InvalidCycleLength)
        ));
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let svc = service("2024-04-01 10:30:00");
        assert!(svc.load_snapshot().await.unwrap().is_none());

        svc.save_snapshot(CalculationKind::Lmp, d("2024-01-01"))
            .await
            .unwrap();
        let snapshot = svc.load_snapshot().await.unwrap().unwrap();
        assert_eq!(snapshot.calculation_type, CalculationKind::Lmp);
        assert_eq!(snapshot.lmp_date, Some(d("2024-01-01")));
        assert_eq!(snapshot.edd_date, None);
        assert_eq!(snapshot.calculated_at, "2024-04-01T10:30:00");
    }

    #[tokio::test]
    async fn test_edd_snapshot_stores_edd_side_only() {
        let svc = service("2024-04-01 10:30:00");
        svc.save_snapshot(CalculationKind::Edd, d("2024-10-07"))
            .await
            .unwrap();
        let snapshot = svc.load_snapshot().await.unwrap().unwrap();
        assert_eq!(snapshot.calculation_type, CalculationKind::Edd);
        assert_eq!(snapshot.lmp_date, None);
        assert_eq!(snapshot.edd_date, Some(d("2024-10-07")));
    }
}
