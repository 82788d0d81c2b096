pub use clubroll_models::{
    AttendanceRecord, CheckLocationRequest, GeofenceVerdict, MarkAttendanceRequest,
};
