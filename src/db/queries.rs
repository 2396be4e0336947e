pub const CREATE_RIDES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Rides (
    rideID INTEGER PRIMARY KEY AUTOINCREMENT,
    startLat REAL NOT NULL,
    startLong REAL NOT NULL,
    endLat REAL NOT NULL,
    endLong REAL NOT NULL,
    riderName TEXT NOT NULL,
    driverName TEXT NOT NULL,
    driverVehicle TEXT NOT NULL,
    created DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const INSERT_RIDE: &str = r#"
INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle)
VALUES (?, ?, ?, ?, ?, ?, ?);
"#;

pub const SELECT_RIDE_BY_ID: &str = r#"
SELECT * FROM Rides WHERE rideID = ?;
"#;

pub const SELECT_ALL_RIDES: &str = r#"
SELECT * FROM Rides ORDER BY rideID;
"#;

pub const SELECT_RIDES_PAGE: &str = r#"
SELECT * FROM Rides ORDER BY rideID LIMIT ? OFFSET ?;
"#;

pub const COUNT_RIDES: &str = r#"
SELECT COUNT(*) FROM Rides;
"#;
