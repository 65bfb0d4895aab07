use super::*;
use crate::{
    Error, ThermoConditions,
    batch::{Job, run_batch},
};

#[test]
fn continues_after_failure() {
    let (hcl, hess) = diatomic(0.5);
    let jobs = vec![
        Job::new("hcl", hcl.clone(), hess.clone()),
        Job::new("bad shape", hcl.clone(), Dmat::zeros(3, 3)),
        Job::new("water", water(), spring_hessian(&water(), 0.5)),
        Job::new("empty", Molecule::default(), Dmat::zeros(0, 0)),
        Job::new("hcl again", hcl, hess),
    ];
    let got = run_batch(&jobs, &ThermoConditions::default());
    assert_eq!(got.len(), jobs.len());
    assert!(matches!(got[1], Err(Error::Shape(_))));
    assert!(matches!(got[3], Err(Error::DegenerateGeometry(_))));
    let first = got[0].as_ref().unwrap();
    let last = got[4].as_ref().unwrap();
    assert_eq!(first, last);
    assert_eq!(got[2].as_ref().unwrap().modes.len(), 3);
}

#[test]
fn invalid_conditions_fail_every_job() {
    let (hcl, hess) = diatomic(0.5);
    let jobs = vec![Job::new("hcl", hcl, hess)];
    let cond = ThermoConditions::default().temperature(-1.0);
    let got = run_batch(&jobs, &cond);
    assert!(matches!(got[0], Err(Error::InvalidConditions(_))));
}

#[test]
fn report_json() {
    let (hcl, hess) = diatomic(0.5);
    let report = Job::new("hcl", hcl, hess)
        .run(&ThermoConditions::default())
        .unwrap();
    let json = report.to_json().unwrap();
    let back: crate::Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back.modes.len(), 1);
    assert_eq!(back.frame.rotor, report.frame.rotor);
}
