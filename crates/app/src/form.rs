//! Form collection state

use chrono::{Datelike, Local, NaiveDate};
use template::{fields, FormData};

use crate::reference::ReferenceTables;

/// Default reason for the absence
pub const DEFAULT_REASON: &str = "通院のため";

/// How the student travels; the code is the key in the mark-position files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Bus or train
    #[default]
    Public,
    /// Walking and everything else
    Other,
}

impl Transport {
    pub const ALL: [Transport; 2] = [Transport::Public, Transport::Other];

    pub fn code(self) -> &'static str {
        match self {
            Transport::Public => "a",
            Transport::Other => "b",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Transport::Public => "バス・電車(a)",
            Transport::Other => "その他(b)",
        }
    }
}

/// Everything the user enters, owned by the running window
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub name: String,
    pub student_id: String,
    pub month: String,
    pub day: String,
    pub subject: String,
    pub teacher: String,
    pub reason: String,
    pub outbound: Transport,
    pub return_trip: Transport,
    /// Use the outbound category for the return trip as well
    pub return_same_as_outbound: bool,
    pub outbound_hour: String,
    pub outbound_minute: String,
    pub return_hour: String,
    pub return_minute: String,
}

impl FormState {
    /// Blank form dated `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            student_id: String::new(),
            month: date.month().to_string(),
            day: date.day().to_string(),
            subject: String::new(),
            teacher: String::new(),
            reason: DEFAULT_REASON.to_string(),
            outbound: Transport::default(),
            return_trip: Transport::default(),
            return_same_as_outbound: true,
            outbound_hour: "8".to_string(),
            outbound_minute: "30".to_string(),
            return_hour: "17".to_string(),
            return_minute: "00".to_string(),
        }
    }

    /// Blank form dated today (local time)
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Select a student and fill in their ID when the table knows them
    pub fn select_student(&mut self, name: &str, tables: &ReferenceTables) {
        self.name = name.to_string();
        if let Some(id) = tables.student_id(name) {
            self.student_id = id.to_string();
        }
    }

    /// Select a subject and fill in its teacher when the table knows it
    pub fn select_subject(&mut self, name: &str, tables: &ReferenceTables) {
        self.subject = name.to_string();
        if let Some(teacher) = tables.teacher_of(name) {
            self.teacher = teacher.to_string();
        }
    }

    /// Category drawn for the return trip
    pub fn return_transport(&self) -> Transport {
        if self.return_same_as_outbound {
            self.outbound
        } else {
            self.return_trip
        }
    }

    /// Flatten the form into label -> value
    pub fn to_form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(fields::NAME, self.name.as_str())
            .insert(fields::STUDENT_ID, self.student_id.as_str())
            .insert(fields::MONTH, self.month.as_str())
            .insert(fields::DAY, self.day.as_str())
            .insert(fields::REASON, self.reason.as_str())
            .insert(fields::SUBJECT, self.subject.as_str())
            .insert(fields::TEACHER, self.teacher.as_str())
            .insert(fields::OUTBOUND_TRANSPORT, self.outbound.code())
            .insert(fields::RETURN_TRANSPORT, self.return_transport().code())
            .insert(fields::OUTBOUND_HOUR, self.outbound_hour.as_str())
            .insert(fields::OUTBOUND_MINUTE, self.outbound_minute.as_str())
            .insert(fields::RETURN_HOUR, self.return_hour.as_str())
            .insert(fields::RETURN_MINUTE, self.return_minute.as_str());
        data
    }
}
