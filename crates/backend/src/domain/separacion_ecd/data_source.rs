use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::separacion_ecd::aggregate::StatusColumns;
use contracts::domain::separacion_ecd::columns::{
    CONCILIACION, ECD_DATASET, ECYP, ENVIO, MEDICION, OFERTA, VALIDACION,
};
use contracts::domain::separacion_ecd::{CellStatus, ClientData, StatusCell, StatusEntry, Subcuenta};
use contracts::enums::ProcessStatus::{self, Error, InProgress, Pending, Success};
use maplit::{btreemap, convert_args};
use once_cell::sync::Lazy;

/// Source of the process table rows
#[async_trait]
pub trait ProcessDataSource: Send + Sync {
    async fn fetch(&self, start: NaiveDate, end: NaiveDate) -> anyhow::Result<Vec<Subcuenta>>;
}

/// In-memory dataset standing in for the back-office
///
/// Serves the same rows for every range.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDataSource;

#[async_trait]
impl ProcessDataSource for MockDataSource {
    async fn fetch(&self, start: NaiveDate, end: NaiveDate) -> anyhow::Result<Vec<Subcuenta>> {
        tracing::debug!(
            "MockDataSource: serving {} subcuentas for {} - {}",
            MOCK_SUBCUENTAS.len(),
            start,
            end
        );
        Ok(MOCK_SUBCUENTAS.clone())
    }
}

static MOCK_SUBCUENTAS: Lazy<Vec<Subcuenta>> = Lazy::new(build_subcuentas);

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn cell(status: ProcessStatus) -> StatusCell {
    StatusCell::single(status)
}

/// Step finished by a user at the given time
fn done(by: &str, day: u32, hour: u32) -> StatusCell {
    StatusCell {
        slots: CellStatus::Single {
            primary: StatusEntry::by(Success, by),
        },
        last_update: Some(at(day, hour, 0)),
    }
}

/// Step run against both measurement providers
fn two_sources(primary: ProcessStatus, secondary: ProcessStatus, day: u32) -> StatusCell {
    StatusCell {
        slots: CellStatus::Dual {
            primary: StatusEntry::by(primary, "sistema"),
            secondary: StatusEntry::by(secondary, "sistema"),
        },
        last_update: Some(at(day, 6, 30)),
    }
}

fn account(id: &str, code: &str, columns: StatusColumns, clients: Vec<ClientData>) -> Subcuenta {
    Subcuenta {
        id: id.to_string(),
        code: code.to_string(),
        is_expanded: false,
        is_selected: false,
        columns,
        clients,
    }
}

fn client(id: &str, name: &str, columns: StatusColumns) -> ClientData {
    ClientData {
        id: id.to_string(),
        name: name.to_string(),
        columns,
    }
}

fn build_subcuentas() -> Vec<Subcuenta> {
    vec![
        account(
            "1",
            "SUB-001",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => two_sources(Success, Success, 2),
                OFERTA => done("mgarcia", 2, 8),
                ECD_DATASET => done("mgarcia", 2, 9),
                ECYP => done("jlopez", 2, 11),
                CONCILIACION => done("jlopez", 2, 12),
                VALIDACION => done("arodriguez", 2, 15),
                ENVIO => done("arodriguez", 2, 16),
            )),
            vec![
                client(
                    "1-1",
                    "Cementos del Norte",
                    convert_args!(keys = String::from, btreemap!(
                        MEDICION => cell(Success),
                        OFERTA => cell(Success),
                        ECD_DATASET => cell(Success),
                        ECYP => cell(Success),
                        CONCILIACION => cell(Success),
                        VALIDACION => cell(Success),
                        ENVIO => cell(Success),
                    )),
                ),
                client(
                    "1-2",
                    "Aceros Monterrey",
                    convert_args!(keys = String::from, btreemap!(
                        MEDICION => cell(Success),
                        OFERTA => cell(Success),
                        ECD_DATASET => cell(Success),
                        ECYP => cell(Success),
                        CONCILIACION => cell(Success),
                        VALIDACION => cell(Success),
                        ENVIO => cell(Pending),
                    )),
                ),
            ],
        ),
        account(
            "2",
            "SUB-002",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => two_sources(Error, Success, 3),
                OFERTA => done("mgarcia", 3, 8),
                ECD_DATASET => cell(Pending),
                ECYP => cell(Pending),
                CONCILIACION => cell(Pending),
                VALIDACION => cell(Pending),
                ENVIO => cell(Pending),
            )),
            vec![client(
                "2-1",
                "Textiles del Bajío",
                convert_args!(keys = String::from, btreemap!(
                    MEDICION => cell(Error),
                    OFERTA => cell(Success),
                    ECD_DATASET => cell(Pending),
                )),
            )],
        ),
        account(
            "3",
            "SUB-003",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => done("sistema", 3, 6),
                OFERTA => done("jlopez", 3, 9),
                ECD_DATASET => cell(InProgress).with_last_update(at(3, 10, 45)),
                ECYP => cell(Pending),
                CONCILIACION => cell(Pending),
                VALIDACION => cell(Pending),
                ENVIO => cell(Pending),
            )),
            Vec::new(),
        ),
        account(
            "4",
            "SUB-004",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => two_sources(InProgress, Success, 4),
                OFERTA => cell(Pending),
                ECD_DATASET => cell(Pending),
                ECYP => cell(Pending),
                CONCILIACION => cell(Pending),
                VALIDACION => cell(Pending),
                ENVIO => cell(Pending),
            )),
            Vec::new(),
        ),
        account(
            "5",
            "SUB-005",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => done("sistema", 4, 6),
                OFERTA => done("mgarcia", 4, 8),
                ECD_DATASET => done("mgarcia", 4, 9),
                ECYP => done("jlopez", 4, 10),
                CONCILIACION => done("jlopez", 4, 12),
                VALIDACION => done("arodriguez", 4, 14),
                ENVIO => cell(InProgress).with_last_update(at(4, 16, 20)),
            )),
            vec![
                client(
                    "5-1",
                    "Minera San Rafael",
                    convert_args!(keys = String::from, btreemap!(
                        MEDICION => cell(Success),
                        OFERTA => cell(Success),
                        ECD_DATASET => cell(Success),
                        ECYP => cell(Success),
                        CONCILIACION => cell(Success),
                        VALIDACION => cell(Success),
                        ENVIO => cell(InProgress),
                    )),
                ),
                client(
                    "5-2",
                    "Papelera del Golfo",
                    convert_args!(keys = String::from, btreemap!(
                        MEDICION => cell(Success),
                        OFERTA => cell(Success),
                        ECD_DATASET => cell(Success),
                        ECYP => cell(Error),
                        CONCILIACION => cell(Success),
                        VALIDACION => cell(Success),
                        ENVIO => cell(Pending),
                    )),
                ),
                client(
                    "5-3",
                    "Vidrios Industriales",
                    convert_args!(keys = String::from, btreemap!(
                        MEDICION => cell(Success),
                        OFERTA => cell(Success),
                        ECD_DATASET => cell(Success),
                        ECYP => cell(Success),
                        CONCILIACION => cell(Success),
                        VALIDACION => cell(Success),
                        ENVIO => cell(Success),
                    )),
                ),
            ],
        ),
        account(
            "6",
            "SUB-006",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => done("sistema", 5, 6),
                OFERTA => cell(Error).with_last_update(at(5, 8, 15)),
                ECD_DATASET => done("mgarcia", 5, 9),
                ECYP => cell(Error).with_last_update(at(5, 11, 5)),
                CONCILIACION => cell(Pending),
                VALIDACION => cell(Pending),
                ENVIO => cell(Pending),
            )),
            Vec::new(),
        ),
        account(
            "7",
            "SUB-007",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => cell(Pending),
                OFERTA => cell(Pending),
            )),
            Vec::new(),
        ),
        account(
            "8",
            "SUB-008",
            convert_args!(keys = String::from, btreemap!(
                MEDICION => done("sistema", 6, 6),
                OFERTA => done("jlopez", 6, 8),
                ECD_DATASET => done("jlopez", 6, 9),
                ECYP => done("jlopez", 6, 10),
                CONCILIACION => done("arodriguez", 6, 12),
                VALIDACION => done("arodriguez", 6, 13),
                ENVIO => done("arodriguez", 6, 14),
            )),
            vec![client(
                "8-1",
                "Química Pacífico",
                convert_args!(keys = String::from, btreemap!(
                    MEDICION => cell(Success),
                    OFERTA => cell(Success),
                    ECD_DATASET => cell(Success),
                    ECYP => cell(Success),
                    CONCILIACION => cell(Success),
                    VALIDACION => cell(Success),
                    ENVIO => cell(Success),
                )),
            )],
        ),
    ]
}
