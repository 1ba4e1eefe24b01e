pub mod eczema_area_severity_index;
