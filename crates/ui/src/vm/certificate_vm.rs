use quest_core::model::Certificate;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateVm {
    pub headline: String,
    pub points_label: String,
    pub issued_label: String,
}

#[must_use]
pub fn map_certificate(quest_title: &str, cert: &Certificate) -> CertificateVm {
    CertificateVm {
        headline: format!("Certificate of Completion: {quest_title}"),
        points_label: format!(
            "{} of {} points across {} tasks",
            cert.earned_points(),
            cert.total_points(),
            cert.task_count()
        ),
        issued_label: format!("Issued {}", format_date(cert.issued_at())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::model::{Catalog, ProgressState};
    use quest_core::time::fixed_now;

    #[test]
    fn certificate_labels() {
        let catalog = Catalog::reference();
        let mut state = ProgressState::new();
        for task in catalog.tasks() {
            state.complete(&catalog, task.id()).unwrap();
        }
        let cert = Certificate::issue(&state.summary(&catalog), fixed_now()).unwrap();

        let vm = map_certificate("Art & Literature Quest", &cert);
        assert_eq!(vm.headline, "Certificate of Completion: Art & Literature Quest");
        assert_eq!(vm.points_label, "70 of 70 points across 5 tasks");
        assert_eq!(vm.issued_label, "Issued May 20, 2024");
    }
}
