pub mod configuration;

pub mod jurisdiction {
    pub mod holidayruleengine;
    pub mod jurisdictionprofile;
    pub mod jurisdictionmanager;
    pub mod uganda;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod weekdaymask;

    pub mod recurringholiday {
        pub mod holidayerror;
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod lunarholiday;
        pub mod observedadjustment;
        pub mod holidayrule;
        pub mod recurringholidaymanager;
    }

    pub mod lunar {
        pub mod lunarholidayid;
        pub mod lunarconversion;
        pub mod lunaroverridetable;
        pub mod lunardateestimator;
    }

    pub mod calendar {
        pub mod calendaroptions;
        pub mod holidayset;
        pub mod holidaycalendar;
        pub mod jurisdictioncalendar;
        pub mod jointcalendar;
    }
}
